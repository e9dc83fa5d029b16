use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::types::internal::auth::Claims;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to generate token: {0}")]
    Generation(String),

    #[error("Token is invalid or expired")]
    Invalid,
}

/// Manages bearer token generation and validation
///
/// Tokens carry the operator's login and role names so role gating does
/// not require a database round trip per request.
pub struct TokenService {
    jwt_secret: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            expiration_minutes: 60,
        }
    }

    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_minutes * 60
    }

    /// Generate a token for the given operator
    pub fn generate(&self, login: &str, roles: Vec<String>) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: login.to_string(),
            roles,
            exp: now + self.expiration_minutes * 60,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Generation(e.to_string()))
    }

    /// Validate a token and return the claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
    }
}
