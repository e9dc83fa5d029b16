use std::env;

/// Telephony manager endpoint and credentials
///
/// Sourced from AMI_HOST, AMI_USER and AMI_PASS.
#[derive(Debug, Clone)]
pub struct AmiConfig {
    pub host: String,
    pub username: String,
    pub secret: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Missing required environment variable: {0}")]
pub struct MissingAmiVariable(pub &'static str);

impl AmiConfig {
    pub fn from_env() -> Result<Self, MissingAmiVariable> {
        Ok(Self {
            host: env::var("AMI_HOST").map_err(|_| MissingAmiVariable("AMI_HOST"))?,
            username: env::var("AMI_USER").map_err(|_| MissingAmiVariable("AMI_USER"))?,
            secret: env::var("AMI_PASS").map_err(|_| MissingAmiVariable("AMI_PASS"))?,
        })
    }
}
