use crate::types::db::stoplist;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "On"
    } else {
        "Off"
    }
}

/// Fixed-format snapshot of an entry, used for CREATE and DELETE log rows
pub fn entry_summary(entry: &stoplist::Model) -> String {
    format!(
        "id={}, code={}, num={}, Audiotel={}, Prive={}, Direct AUO={}, All={}",
        entry.id,
        entry.code,
        entry.number,
        on_off(entry.reason1),
        on_off(entry.reason2),
        on_off(entry.reason3),
        on_off(entry.reason4),
    )
}

/// Describe an update by its first changed field
///
/// Fields are checked in a fixed priority order (reason1, reason2, reason3,
/// reason4, code, number) and only the first difference is reported, even
/// when several fields changed in the same request. Changes to lower-priority
/// fields are silently dropped from the description; the row itself always
/// carries the full new state.
pub fn describe_change(before: &stoplist::Model, after: &stoplist::Model) -> String {
    if before.reason1 != after.reason1 {
        format!("Audiotel={}", on_off(after.reason1))
    } else if before.reason2 != after.reason2 {
        format!("Prive={}", on_off(after.reason2))
    } else if before.reason3 != after.reason3 {
        format!("Direct AUO={}", on_off(after.reason3))
    } else if before.reason4 != after.reason4 {
        format!("All={}", on_off(after.reason4))
    } else if before.code != after.code {
        format!("Code={}", after.code)
    } else if before.number != after.number {
        format!("Number={}", after.number)
    } else {
        "None".to_string()
    }
}
