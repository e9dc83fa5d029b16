use poem_openapi::Object;

use crate::types::db::log_entry;

/// Response model for an audit log row
#[derive(Object, Debug)]
pub struct LogEntryResponse {
    pub id: i32,
    /// Write timestamp (RFC 3339)
    pub created_on: String,
    /// Referenced stoplist entry; may no longer exist after a delete
    pub stoplist_id: i32,
    pub user: String,
    /// CREATE, UPDATE or DELETE
    #[oai(rename = "type")]
    pub r#type: String,
    pub data: String,
}

impl From<log_entry::Model> for LogEntryResponse {
    fn from(m: log_entry::Model) -> Self {
        Self {
            id: m.id,
            created_on: m.created_on.to_rfc3339(),
            stoplist_id: m.stoplist_id,
            user: m.user,
            r#type: m.r#type,
            data: m.data,
        }
    }
}

/// Response model for an audit log listing
#[derive(Object, Debug)]
pub struct LogPage {
    pub entries: Vec<LogEntryResponse>,
    pub total: u64,
}
