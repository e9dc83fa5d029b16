use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::api::helpers::{self, Authz};
use crate::config::StoplistPolicy;
use crate::errors::api::AdminApiError;
use crate::services::TokenService;
use crate::types::dto::views::{FieldMeta, ViewMeta, ViewsResponse};

/// API tags for view metadata
#[derive(Tags)]
enum ViewTags {
    /// Admin view configuration
    Views,
}

/// Declarative view configuration endpoint
///
/// Replaces a server-rendered admin panel: a generic UI fetches this
/// metadata and renders list/edit/search controls per entity from it.
pub struct ViewsApi {
    token_service: Arc<TokenService>,
    policy: StoplistPolicy,
}

impl ViewsApi {
    pub fn new(token_service: Arc<TokenService>, policy: StoplistPolicy) -> Self {
        Self {
            token_service,
            policy,
        }
    }

    fn stoplist_view(&self) -> ViewMeta {
        ViewMeta {
            entity: "stoplist".to_string(),
            required_role: "staff".to_string(),
            can_create: true,
            can_edit: self.policy.allow_update,
            can_delete: true,
            fields: vec![
                FieldMeta::new("id", "id").filterable(),
                FieldMeta::new("number", "Number").searchable().filterable(),
                FieldMeta::new("code", "Code").searchable().filterable().editable(),
                FieldMeta::new("reason1", "Audiotel").filterable().editable(),
                FieldMeta::new("reason2", "Private").filterable().editable(),
                FieldMeta::new("reason3", "Direct AUO").filterable().editable(),
                FieldMeta::new("reason4", "No calls").filterable().editable(),
                FieldMeta::new("updated_on", "Last modified"),
                FieldMeta::new("user", "Operator"),
            ],
        }
    }

    fn users_view(&self) -> ViewMeta {
        // The password hash is not a field at all here
        ViewMeta {
            entity: "users".to_string(),
            required_role: "admin".to_string(),
            can_create: true,
            can_edit: true,
            can_delete: true,
            fields: vec![
                FieldMeta::new("id", "id"),
                FieldMeta::new("login", "Login").searchable(),
                FieldMeta::new("active", "Active").editable(),
                FieldMeta::new("roles", "Roles").editable(),
            ],
        }
    }

    fn roles_view(&self) -> ViewMeta {
        ViewMeta {
            entity: "roles".to_string(),
            required_role: "admin".to_string(),
            can_create: true,
            can_edit: false,
            can_delete: false,
            fields: vec![
                FieldMeta::new("name", "Name"),
                FieldMeta::new("description", "Description"),
            ],
        }
    }

    fn journal_view(&self) -> ViewMeta {
        ViewMeta {
            entity: "journal".to_string(),
            required_role: "admin".to_string(),
            can_create: false,
            can_edit: false,
            can_delete: false,
            fields: vec![
                FieldMeta::new("id", "id"),
                FieldMeta::new("created_on", "Date"),
                FieldMeta::new("stoplist_id", "Entry").searchable().filterable(),
                FieldMeta::new("user", "Operator").searchable().filterable(),
                FieldMeta::new("type", "Action").searchable().filterable(),
                FieldMeta::new("data", "Details").searchable().filterable(),
            ],
        }
    }
}

#[OpenApi(prefix_path = "/views")]
impl ViewsApi {
    /// Fetch the declarative admin-view configuration
    #[oai(path = "/", method = "get", tag = "ViewTags::Views")]
    async fn views(&self, auth: BearerAuth) -> Result<Json<ViewsResponse>, AdminApiError> {
        helpers::require_staff(&self.token_service, &auth).map_err(|e| match e {
            Authz::Unauthorized => AdminApiError::unauthorized(),
            Authz::Forbidden => AdminApiError::forbidden(),
        })?;

        Ok(Json(ViewsResponse {
            views: vec![
                self.stoplist_view(),
                self.users_view(),
                self.roles_view(),
                self.journal_view(),
            ],
        }))
    }
}
