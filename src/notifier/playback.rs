/// Derive the playback code for an entry's reason flags
///
/// Tokens are emitted pre-encoded for the manager's key/value store:
/// `/` as `%2F` inside each token, tokens joined with `%26`. reason4
/// replaces the whole list with the single all-calls token. With every
/// flag off the value is the empty string.
pub fn derive_playback(reason1: bool, reason2: bool, reason3: bool, reason4: bool) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    if reason1 {
        tokens.push("stop%2Faudiotel");
    }
    if reason2 {
        tokens.push("stop%2Fprive");
    }
    if reason3 {
        tokens.push("stop%2Fauo");
    }
    if reason4 {
        tokens = vec!["stop%2Fall"];
    }
    tokens.join("%26")
}
