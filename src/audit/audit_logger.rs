use std::sync::Arc;

use crate::errors::InternalError;
use crate::stores::LogStore;
use crate::types::db::log_entry;
use crate::types::internal::Operator;

/// Kind of stoplist mutation being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Create => "CREATE",
            MutationKind::Update => "UPDATE",
            MutationKind::Delete => "DELETE",
        }
    }
}

/// Writer for the append-only stoplist audit trail
///
/// One row per mutation, referencing the affected entry by id. Rows are
/// never touched again once written; the referenced entry may be deleted
/// later without affecting them.
pub struct AuditLogger {
    log_store: Arc<LogStore>,
}

impl AuditLogger {
    pub fn new(log_store: Arc<LogStore>) -> Self {
        Self { log_store }
    }

    /// Append one audit row for a mutation
    ///
    /// # Arguments
    /// * `operator` - Acting operator; their login is recorded verbatim
    /// * `kind` - CREATE, UPDATE or DELETE
    /// * `stoplist_id` - Id of the affected entry
    /// * `data` - Fixed-format summary or change description
    pub async fn record(
        &self,
        operator: &Operator,
        kind: MutationKind,
        stoplist_id: i32,
        data: &str,
    ) -> Result<log_entry::Model, InternalError> {
        tracing::debug!(
            kind = kind.as_str(),
            stoplist_id,
            operator = %operator.login,
            "Writing audit log entry"
        );

        self.log_store
            .append(stoplist_id, &operator.login, kind.as_str(), data)
            .await
    }
}
