use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::stoplist::{self, Entity as Stoplist};
use crate::types::internal::stoplist::{NewStoplistEntry, StoplistChanges};

/// Search/filter parameters for the stoplist listing
///
/// `search` is a substring match over the number and code columns; the
/// remaining fields are exact-match filters.
#[derive(Debug, Default, Clone)]
pub struct StoplistFilter {
    pub search: Option<String>,
    pub id: Option<i32>,
    pub number: Option<i64>,
    pub code: Option<i32>,
    pub reason1: Option<bool>,
    pub reason2: Option<bool>,
    pub reason3: Option<bool>,
    pub reason4: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Repository for stoplist entries
pub struct StoplistStore {
    db: DatabaseConnection,
}

impl StoplistStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new entry, stamping timestamps and the acting operator
    ///
    /// # Errors
    ///
    /// Returns `InternalError::DuplicateNumber` when the number is already
    /// present; any other database failure maps to `InternalError::Database`.
    pub async fn insert(
        &self,
        entry: &NewStoplistEntry,
        operator_login: &str,
    ) -> Result<stoplist::Model, InternalError> {
        let now = Utc::now();
        let model = stoplist::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            code: Set(entry.code),
            number: Set(entry.number),
            reason1: Set(entry.reason1),
            reason2: Set(entry.reason2),
            reason3: Set(entry.reason3),
            reason4: Set(entry.reason4),
            created_on: Set(now),
            updated_on: Set(now),
            user: Set(Some(operator_login.to_string())),
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::DuplicateNumber(entry.number)
            } else {
                InternalError::database("insert_stoplist_entry", e)
            }
        })
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<stoplist::Model>, InternalError> {
        Stoplist::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_stoplist_entry", e))
    }

    pub async fn find_by_number(
        &self,
        number: i64,
    ) -> Result<Option<stoplist::Model>, InternalError> {
        Stoplist::find()
            .filter(stoplist::Column::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_stoplist_by_number", e))
    }

    /// Apply a field-level change set to an existing entry
    ///
    /// Only fields present in `changes` are written; `updated_on` and the
    /// operator stamp are always refreshed.
    pub async fn update(
        &self,
        current: stoplist::Model,
        changes: &StoplistChanges,
        operator_login: &str,
    ) -> Result<stoplist::Model, InternalError> {
        let number = changes.number.unwrap_or(current.number);
        let mut model: stoplist::ActiveModel = current.into();
        if let Some(code) = changes.code {
            model.code = Set(code);
        }
        if let Some(n) = changes.number {
            model.number = Set(n);
        }
        if let Some(r) = changes.reason1 {
            model.reason1 = Set(r);
        }
        if let Some(r) = changes.reason2 {
            model.reason2 = Set(r);
        }
        if let Some(r) = changes.reason3 {
            model.reason3 = Set(r);
        }
        if let Some(r) = changes.reason4 {
            model.reason4 = Set(r);
        }
        model.updated_on = Set(Utc::now());
        model.user = Set(Some(operator_login.to_string()));

        model.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::DuplicateNumber(number)
            } else {
                InternalError::database("update_stoplist_entry", e)
            }
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        Stoplist::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_stoplist_entry", e))?;
        Ok(())
    }

    /// List entries matching the filter, newest first, with the total count
    pub async fn list(
        &self,
        filter: &StoplistFilter,
    ) -> Result<(Vec<stoplist::Model>, u64), InternalError> {
        let mut query = Stoplist::find();

        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(stoplist::Column::Number.like(pattern.clone()))
                    .add(stoplist::Column::Code.like(pattern)),
            );
        }
        if let Some(id) = filter.id {
            query = query.filter(stoplist::Column::Id.eq(id));
        }
        if let Some(number) = filter.number {
            query = query.filter(stoplist::Column::Number.eq(number));
        }
        if let Some(code) = filter.code {
            query = query.filter(stoplist::Column::Code.eq(code));
        }
        if let Some(r) = filter.reason1 {
            query = query.filter(stoplist::Column::Reason1.eq(r));
        }
        if let Some(r) = filter.reason2 {
            query = query.filter(stoplist::Column::Reason2.eq(r));
        }
        if let Some(r) = filter.reason3 {
            query = query.filter(stoplist::Column::Reason3.eq(r));
        }
        if let Some(r) = filter.reason4 {
            query = query.filter(stoplist::Column::Reason4.eq(r));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_stoplist_entries", e))?;

        let mut query = query.order_by_desc(stoplist::Column::UpdatedOn);
        if let Some(offset) = filter.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let entries = query
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_stoplist_entries", e))?;

        Ok((entries, total))
    }
}

/// Duplicate-key detection across the supported backends
///
/// SQLite reports "UNIQUE constraint failed", MySQL "Duplicate entry".
pub(crate) fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("Duplicate entry")
}
