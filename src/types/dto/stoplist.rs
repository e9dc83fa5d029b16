use poem_openapi::Object;

use crate::types::db::stoplist;
use crate::types::internal::stoplist::{NewStoplistEntry, StoplistChanges};

/// Request model for adding a number to the stoplist
#[derive(Object, Debug)]
pub struct CreateStoplistRequest {
    /// Routing/reason code
    pub code: i32,
    /// Blocked phone number
    pub number: i64,
    /// Audiotel
    #[oai(default)]
    pub reason1: bool,
    /// Private
    #[oai(default)]
    pub reason2: bool,
    /// Direct AUO
    #[oai(default)]
    pub reason3: bool,
    /// Block all calls (overrides the other reasons)
    #[oai(default)]
    pub reason4: bool,
}

impl From<CreateStoplistRequest> for NewStoplistEntry {
    fn from(req: CreateStoplistRequest) -> Self {
        Self {
            code: req.code,
            number: req.number,
            reason1: req.reason1,
            reason2: req.reason2,
            reason3: req.reason3,
            reason4: req.reason4,
        }
    }
}

/// Request model for editing a stoplist entry
///
/// Absent fields are left unchanged.
#[derive(Object, Debug, Default)]
pub struct UpdateStoplistRequest {
    pub code: Option<i32>,
    pub number: Option<i64>,
    pub reason1: Option<bool>,
    pub reason2: Option<bool>,
    pub reason3: Option<bool>,
    pub reason4: Option<bool>,
}

impl From<UpdateStoplistRequest> for StoplistChanges {
    fn from(req: UpdateStoplistRequest) -> Self {
        Self {
            code: req.code,
            number: req.number,
            reason1: req.reason1,
            reason2: req.reason2,
            reason3: req.reason3,
            reason4: req.reason4,
        }
    }
}

/// Response model for a stoplist entry
#[derive(Object, Debug)]
pub struct StoplistEntry {
    pub id: i32,
    pub code: i32,
    pub number: i64,
    pub reason1: bool,
    pub reason2: bool,
    pub reason3: bool,
    pub reason4: bool,
    /// Creation timestamp (RFC 3339)
    pub created_on: String,
    /// Last modification timestamp (RFC 3339)
    pub updated_on: String,
    /// Operator who last touched the record
    pub user: Option<String>,
}

impl From<stoplist::Model> for StoplistEntry {
    fn from(m: stoplist::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            number: m.number,
            reason1: m.reason1,
            reason2: m.reason2,
            reason3: m.reason3,
            reason4: m.reason4,
            created_on: m.created_on.to_rfc3339(),
            updated_on: m.updated_on.to_rfc3339(),
            user: m.user,
        }
    }
}

/// Response model for a stoplist listing
#[derive(Object, Debug)]
pub struct StoplistPage {
    pub entries: Vec<StoplistEntry>,
    pub total: u64,
}
