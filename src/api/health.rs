use poem_openapi::{payload::PlainText, OpenApi, Tags};

/// API tags for health endpoints
#[derive(Tags)]
enum HealthTags {
    /// Health check
    Health,
}

/// Health check API
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> PlainText<&'static str> {
        PlainText("ok")
    }
}
