use serde::{Deserialize, Serialize};

/// JWT claims carried by the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Operator login
    pub sub: String,
    /// Role names assigned to the operator
    pub roles: Vec<String>,
    /// Expiration (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}
