use std::env;

/// Behavior switches for the mutation pipeline
///
/// Deployments of this system disagree on two points: whether an entry
/// must carry at least one reason flag, and whether entries may be edited
/// after creation. Both are kept configurable rather than hardcoding one
/// deployment's behavior.
#[derive(Debug, Clone, Copy)]
pub struct StoplistPolicy {
    /// Reject entries with all four reason flags unset (default: true)
    pub require_reason: bool,
    /// Permit the update operation at all (default: true)
    pub allow_update: bool,
}

impl Default for StoplistPolicy {
    fn default() -> Self {
        Self {
            require_reason: true,
            allow_update: true,
        }
    }
}

impl StoplistPolicy {
    /// Load policy flags from STOPLIST_REQUIRE_REASON / STOPLIST_ALLOW_UPDATE
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            require_reason: env_flag("STOPLIST_REQUIRE_REASON", true),
            allow_update: env_flag("STOPLIST_ALLOW_UPDATE", true),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
