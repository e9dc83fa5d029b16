use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::api::helpers::{self, Authz};
use crate::errors::api::AdminApiError;
use crate::services::TokenService;
use crate::stores::UserStore;
use crate::types::dto::admin::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::types::dto::common::MessageResponse;

/// API tags for user management endpoints
#[derive(Tags)]
enum UserTags {
    /// Operator account management
    Users,
}

/// User management API endpoints (admin only)
pub struct UserApi {
    user_store: Arc<UserStore>,
    token_service: Arc<TokenService>,
}

impl UserApi {
    pub fn new(user_store: Arc<UserStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    fn authorize(&self, auth: &BearerAuth) -> Result<(), AdminApiError> {
        helpers::require_admin(&self.token_service, auth)
            .map(|_| ())
            .map_err(|e| match e {
                Authz::Unauthorized => AdminApiError::unauthorized(),
                Authz::Forbidden => AdminApiError::forbidden(),
            })
    }
}

#[OpenApi(prefix_path = "/users")]
impl UserApi {
    /// List operator accounts, optionally filtered by login substring
    #[oai(path = "/", method = "get", tag = "UserTags::Users")]
    async fn list(
        &self,
        auth: BearerAuth,
        search: Query<Option<String>>,
    ) -> Result<Json<Vec<UserResponse>>, AdminApiError> {
        self.authorize(&auth)?;

        let users = self.user_store.list(search.0.as_deref()).await?;

        Ok(Json(
            users
                .into_iter()
                .map(|(user, roles)| UserResponse::from_model(user, roles))
                .collect(),
        ))
    }

    /// Create an operator account
    #[oai(path = "/", method = "post", tag = "UserTags::Users")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminApiError> {
        self.authorize(&auth)?;

        let user = self
            .user_store
            .create(&body.login, &body.password, body.active, &body.roles)
            .await?;
        let roles = self.user_store.roles_for(&user).await?;

        Ok(Json(UserResponse::from_model(user, roles)))
    }

    /// Edit an operator account
    #[oai(path = "/:id", method = "put", tag = "UserTags::Users")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminApiError> {
        self.authorize(&auth)?;

        let user = self
            .user_store
            .update(
                id.0,
                body.password.as_deref(),
                body.active,
                body.roles.as_deref(),
            )
            .await?;
        let roles = self.user_store.roles_for(&user).await?;

        Ok(Json(UserResponse::from_model(user, roles)))
    }

    /// Delete an operator account
    #[oai(path = "/:id", method = "delete", tag = "UserTags::Users")]
    async fn delete(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, AdminApiError> {
        self.authorize(&auth)?;

        self.user_store
            .find_by_id(id.0)
            .await?
            .ok_or_else(|| AdminApiError::not_found(format!("User {} not found", id.0)))?;
        self.user_store.delete(id.0).await?;

        Ok(Json(MessageResponse::new("User deleted")))
    }
}
