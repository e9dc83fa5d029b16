use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::audit::AuditLogger;
use crate::config::{AmiConfig, StoplistPolicy};
use crate::coordinators::StoplistCoordinator;
use crate::notifier::{AmiClient, StoplistNotifier};
use crate::services::TokenService;
use crate::stores::{LogStore, RoleStore, StoplistStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API
/// endpoints. Stores are built first, then the audit logger and notifier,
/// then the coordinator that ties them together.
pub struct AppData {
    pub db: DatabaseConnection,
    pub stoplist_store: Arc<StoplistStore>,
    pub log_store: Arc<LogStore>,
    pub user_store: Arc<UserStore>,
    pub role_store: Arc<RoleStore>,
    pub audit_logger: Arc<AuditLogger>,
    pub notifier: Arc<dyn StoplistNotifier>,
    pub stoplist_coordinator: Arc<StoplistCoordinator>,
    pub token_service: Arc<TokenService>,
    pub policy: StoplistPolicy,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should already be migrated.
    pub fn init(
        db: DatabaseConnection,
        ami_config: AmiConfig,
        jwt_secret: String,
        policy: StoplistPolicy,
    ) -> Self {
        tracing::debug!("Initializing application data");

        let stoplist_store = Arc::new(StoplistStore::new(db.clone()));
        let log_store = Arc::new(LogStore::new(db.clone()));
        let user_store = Arc::new(UserStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));

        let audit_logger = Arc::new(AuditLogger::new(log_store.clone()));
        let notifier: Arc<dyn StoplistNotifier> = Arc::new(AmiClient::new(ami_config));
        let token_service = Arc::new(TokenService::new(jwt_secret));

        let stoplist_coordinator = Arc::new(StoplistCoordinator::new(
            stoplist_store.clone(),
            audit_logger.clone(),
            notifier.clone(),
            policy,
        ));

        Self {
            db,
            stoplist_store,
            log_store,
            user_store,
            role_store,
            audit_logger,
            notifier,
            stoplist_coordinator,
            token_service,
            policy,
        }
    }
}
