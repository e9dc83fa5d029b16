/// A proposed new stoplist entry, as submitted by the form layer
#[derive(Debug, Clone, PartialEq)]
pub struct NewStoplistEntry {
    pub code: i32,
    pub number: i64,
    pub reason1: bool,
    pub reason2: bool,
    pub reason3: bool,
    pub reason4: bool,
}

/// Field-level change set for an update
///
/// Only fields present in the submitted form are `Some`; untouched fields
/// keep their persisted value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoplistChanges {
    pub code: Option<i32>,
    pub number: Option<i64>,
    pub reason1: Option<bool>,
    pub reason2: Option<bool>,
    pub reason3: Option<bool>,
    pub reason4: Option<bool>,
}
