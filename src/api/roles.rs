use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::api::helpers::{self, Authz};
use crate::errors::api::AdminApiError;
use crate::services::TokenService;
use crate::stores::RoleStore;
use crate::types::dto::admin::{CreateRoleRequest, RoleResponse};

/// API tags for role endpoints
#[derive(Tags)]
enum RoleTags {
    /// Role management
    Roles,
}

/// Role management API endpoints (admin only)
pub struct RoleApi {
    role_store: Arc<RoleStore>,
    token_service: Arc<TokenService>,
}

impl RoleApi {
    pub fn new(role_store: Arc<RoleStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            role_store,
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

#[OpenApi(prefix_path = "/roles")]
impl RoleApi {
    /// List roles
    #[oai(path = "/", method = "get", tag = "RoleTags::Roles")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<RoleResponse>>, AdminApiError> {
        self.authorize(&auth)?;

        let roles = self.role_store.list().await?;

        Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
    }

    /// Create a role (no-op if the name already exists)
    #[oai(path = "/", method = "post", tag = "RoleTags::Roles")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateRoleRequest>,
    ) -> Result<Json<RoleResponse>, AdminApiError> {
        self.authorize(&auth)?;

        let role = self
            .role_store
            .find_or_create(&body.name, body.description.as_deref())
            .await?;

        Ok(Json(role.into()))
    }
}
