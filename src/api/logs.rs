use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::api::helpers::{self, Authz};
use crate::errors::api::AdminApiError;
use crate::services::TokenService;
use crate::stores::{LogFilter, LogStore};
use crate::types::dto::logs::{LogEntryResponse, LogPage};

/// API tags for audit log endpoints
#[derive(Tags)]
enum LogTags {
    /// Audit journal
    Journal,
}

/// Audit log API endpoints (admin only, read-only)
///
/// There is deliberately no create/update/delete surface here: the journal
/// is written exclusively by the mutation pipeline.
pub struct LogApi {
    log_store: Arc<LogStore>,
    token_service: Arc<TokenService>,
}

impl LogApi {
    pub fn new(log_store: Arc<LogStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            log_store,
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

#[OpenApi(prefix_path = "/journal")]
impl LogApi {
    /// List audit log rows with search and filters
    #[oai(path = "/", method = "get", tag = "LogTags::Journal")]
    async fn list(
        &self,
        auth: BearerAuth,
        search: Query<Option<String>>,
        stoplist_id: Query<Option<i32>>,
        #[oai(name = "type")] log_type: Query<Option<String>>,
        user: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> Result<Json<LogPage>, AdminApiError> {
        self.authorize(&auth)?;

        let filter = LogFilter {
            search: search.0,
            stoplist_id: stoplist_id.0,
            r#type: log_type.0,
            user: user.0,
            limit: limit.0,
            offset: offset.0,
        };

        let (entries, total) = self.log_store.list(&filter).await?;

        Ok(Json(LogPage {
            entries: entries.into_iter().map(LogEntryResponse::from).collect(),
            total,
        }))
    }
}
