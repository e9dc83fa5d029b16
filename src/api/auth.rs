use poem_openapi::{auth::Bearer, payload::Json, OpenApi, SecurityScheme, Tags};
use std::sync::Arc;

use crate::errors::api::AuthError;
use crate::services::TokenService;
use crate::stores::UserStore;
use crate::types::dto::auth::{LoginRequest, TokenResponse};

/// Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

/// Authentication API endpoints
pub struct AuthApi {
    user_store: Arc<UserStore>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    pub fn new(user_store: Arc<UserStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_store,
            token_service,
        }
    }
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with login and password to receive a bearer token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let (user, roles) = self
            .user_store
            .verify_credentials(&body.login, &body.password)
            .await
            .map_err(|e| AuthError::internal_error(e.to_string()))?
            .ok_or_else(AuthError::invalid_credentials)?;

        if !user.active {
            return Err(AuthError::inactive_account());
        }

        let role_names: Vec<String> = roles.into_iter().map(|r| r.name).collect();
        let access_token = self
            .token_service
            .generate(&user.login, role_names)
            .map_err(|e| AuthError::internal_error(e.to_string()))?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.expires_in_seconds(),
        }))
    }
}
