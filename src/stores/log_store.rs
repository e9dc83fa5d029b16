use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::internal::AuditError;
use crate::errors::InternalError;
use crate::types::db::log_entry::{self, Entity as LogEntry};

/// Search/filter parameters for the audit log listing
#[derive(Debug, Default, Clone)]
pub struct LogFilter {
    /// Substring match over user, type and data
    pub search: Option<String>,
    pub stoplist_id: Option<i32>,
    pub r#type: Option<String>,
    pub user: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Repository for the append-only stoplist audit log
///
/// Exposes only append and read operations; rows are never updated or
/// deleted once written.
pub struct LogStore {
    db: DatabaseConnection,
}

impl LogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one audit row
    ///
    /// `stoplist_id` is recorded as-is; the referenced entry may already be
    /// scheduled for deletion by the caller.
    pub async fn append(
        &self,
        stoplist_id: i32,
        user: &str,
        r#type: &str,
        data: &str,
    ) -> Result<log_entry::Model, InternalError> {
        let row = log_entry::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            created_on: Set(Utc::now()),
            stoplist_id: Set(stoplist_id),
            user: Set(user.to_string()),
            r#type: Set(r#type.to_string()),
            data: Set(data.to_string()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| AuditError::LogWriteFailed(e.to_string()).into())
    }

    /// List log rows matching the filter, newest first, with the total count
    pub async fn list(
        &self,
        filter: &LogFilter,
    ) -> Result<(Vec<log_entry::Model>, u64), InternalError> {
        let mut query = LogEntry::find();

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(log_entry::Column::User.like(pattern.clone()))
                    .add(log_entry::Column::Type.like(pattern.clone()))
                    .add(log_entry::Column::Data.like(pattern)),
            );
        }
        if let Some(id) = filter.stoplist_id {
            query = query.filter(log_entry::Column::StoplistId.eq(id));
        }
        if let Some(t) = &filter.r#type {
            query = query.filter(log_entry::Column::Type.eq(t.clone()));
        }
        if let Some(user) = &filter.user {
            query = query.filter(log_entry::Column::User.eq(user.clone()));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_log_entries", e))?;

        let mut query = query.order_by_desc(log_entry::Column::Id);
        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let entries = query
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_log_entries", e))?;

        Ok((entries, total))
    }

    /// All log rows referencing one stoplist entry, oldest first
    pub async fn find_by_stoplist_id(
        &self,
        stoplist_id: i32,
    ) -> Result<Vec<log_entry::Model>, InternalError> {
        LogEntry::find()
            .filter(log_entry::Column::StoplistId.eq(stoplist_id))
            .order_by_asc(log_entry::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_log_entries", e))
    }
}
