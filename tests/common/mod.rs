// Common test utilities for integration tests

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::{Arc, Mutex};

use stoplist_backend::audit::AuditLogger;
use stoplist_backend::config::StoplistPolicy;
use stoplist_backend::coordinators::StoplistCoordinator;
use stoplist_backend::errors::internal::NotifierError;
use stoplist_backend::notifier::StoplistNotifier;
use stoplist_backend::stores::{LogStore, StoplistStore};

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// One recorded telephony manager command
#[derive(Debug, Clone, PartialEq)]
pub enum NotifierCall {
    Put { number: i64, playback: String },
    Del { number: i64 },
}

/// Notifier double that records commands instead of talking HTTP
#[derive(Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<NotifierCall>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<NotifierCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoplistNotifier for RecordingNotifier {
    async fn db_put(&self, number: i64, playback: &str) -> Result<(), NotifierError> {
        self.calls.lock().unwrap().push(NotifierCall::Put {
            number,
            playback: playback.to_string(),
        });
        Ok(())
    }

    async fn db_del(&self, number: i64) -> Result<(), NotifierError> {
        self.calls.lock().unwrap().push(NotifierCall::Del { number });
        Ok(())
    }
}

/// Fully wired mutation pipeline over an in-memory database
pub struct PipelineHarness {
    pub db: DatabaseConnection,
    pub coordinator: StoplistCoordinator,
    pub stoplist_store: Arc<StoplistStore>,
    pub log_store: Arc<LogStore>,
    pub notifier: Arc<RecordingNotifier>,
}

pub async fn setup_pipeline(policy: StoplistPolicy) -> PipelineHarness {
    let db = setup_test_db().await;

    let stoplist_store = Arc::new(StoplistStore::new(db.clone()));
    let log_store = Arc::new(LogStore::new(db.clone()));
    let audit_logger = Arc::new(AuditLogger::new(log_store.clone()));
    let notifier = Arc::new(RecordingNotifier::new());

    let coordinator = StoplistCoordinator::new(
        stoplist_store.clone(),
        audit_logger,
        notifier.clone(),
        policy,
    );

    PipelineHarness {
        db,
        coordinator,
        stoplist_store,
        log_store,
        notifier,
    }
}
