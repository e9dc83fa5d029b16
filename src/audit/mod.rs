// Audit logging for stoplist mutations
mod audit_logger;
mod format;

pub use audit_logger::{AuditLogger, MutationKind};
pub use format::{describe_change, entry_summary};
