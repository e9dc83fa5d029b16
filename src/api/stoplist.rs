use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::api::helpers::{self, Authz};
use crate::coordinators::StoplistCoordinator;
use crate::errors::api::StoplistApiError;
use crate::services::TokenService;
use crate::stores::{StoplistFilter, StoplistStore};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::stoplist::{
    CreateStoplistRequest, StoplistEntry, StoplistPage, UpdateStoplistRequest,
};

/// API tags for stoplist endpoints
#[derive(Tags)]
enum StoplistTags {
    /// Stoplist management
    Stoplist,
}

/// Stoplist API endpoints
///
/// All endpoints require the staff or admin role. Mutations go through
/// the coordinator; reads hit the store directly.
pub struct StoplistApi {
    coordinator: Arc<StoplistCoordinator>,
    stoplist_store: Arc<StoplistStore>,
    token_service: Arc<TokenService>,
}

impl StoplistApi {
    pub fn new(
        coordinator: Arc<StoplistCoordinator>,
        stoplist_store: Arc<StoplistStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            coordinator,
            stoplist_store,
            token_service,
        }
    }

    fn authorize(&self, auth: &BearerAuth) -> Result<crate::types::internal::Operator, StoplistApiError> {
        helpers::require_staff(&self.token_service, auth).map_err(|e| match e {
            Authz::Unauthorized => StoplistApiError::unauthorized(),
            Authz::Forbidden => StoplistApiError::forbidden("The staff or admin role is required"),
        })
    }
}

#[OpenApi(prefix_path = "/stoplist")]
impl StoplistApi {
    /// List stoplist entries with search and filters
    #[oai(path = "/", method = "get", tag = "StoplistTags::Stoplist")]
    #[allow(clippy::too_many_arguments)]
    async fn list(
        &self,
        auth: BearerAuth,
        search: Query<Option<String>>,
        id: Query<Option<i32>>,
        number: Query<Option<i64>>,
        code: Query<Option<i32>>,
        reason1: Query<Option<bool>>,
        reason2: Query<Option<bool>>,
        reason3: Query<Option<bool>>,
        reason4: Query<Option<bool>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> Result<Json<StoplistPage>, StoplistApiError> {
        self.authorize(&auth)?;

        let filter = StoplistFilter {
            search: search.0,
            id: id.0,
            number: number.0,
            code: code.0,
            reason1: reason1.0,
            reason2: reason2.0,
            reason3: reason3.0,
            reason4: reason4.0,
            limit: limit.0,
            offset: offset.0,
        };

        let (entries, total) = self.stoplist_store.list(&filter).await?;

        Ok(Json(StoplistPage {
            entries: entries.into_iter().map(StoplistEntry::from).collect(),
            total,
        }))
    }

    /// Fetch one stoplist entry
    #[oai(path = "/:id", method = "get", tag = "StoplistTags::Stoplist")]
    async fn get(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<StoplistEntry>, StoplistApiError> {
        self.authorize(&auth)?;

        let entry = self
            .stoplist_store
            .find_by_id(id.0)
            .await?
            .ok_or_else(|| StoplistApiError::not_found(id.0))?;

        Ok(Json(entry.into()))
    }

    /// Add a number to the stoplist
    #[oai(path = "/", method = "post", tag = "StoplistTags::Stoplist")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateStoplistRequest>,
    ) -> Result<Json<StoplistEntry>, StoplistApiError> {
        let operator = self.authorize(&auth)?;

        let created = self.coordinator.create(&operator, body.0.into()).await?;

        Ok(Json(created.into()))
    }

    /// Edit a stoplist entry
    #[oai(path = "/:id", method = "put", tag = "StoplistTags::Stoplist")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateStoplistRequest>,
    ) -> Result<Json<StoplistEntry>, StoplistApiError> {
        let operator = self.authorize(&auth)?;

        let updated = self
            .coordinator
            .update(&operator, id.0, body.0.into())
            .await?;

        Ok(Json(updated.into()))
    }

    /// Remove a number from the stoplist
    #[oai(path = "/:id", method = "delete", tag = "StoplistTags::Stoplist")]
    async fn delete(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, StoplistApiError> {
        let operator = self.authorize(&auth)?;

        self.coordinator.delete(&operator, id.0).await?;

        Ok(Json(MessageResponse::new("Stoplist entry deleted")))
    }
}
