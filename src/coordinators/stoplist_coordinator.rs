use std::sync::Arc;

use crate::audit::{describe_change, entry_summary, AuditLogger, MutationKind};
use crate::config::StoplistPolicy;
use crate::errors::InternalError;
use crate::notifier::{derive_playback, StoplistNotifier};
use crate::stores::StoplistStore;
use crate::types::db::stoplist;
use crate::types::internal::stoplist::{NewStoplistEntry, StoplistChanges};
use crate::types::internal::Operator;

/// Orchestrator for stoplist mutations
///
/// Every create/update/delete runs the same sequence: validate, persist,
/// append an audit row, mirror to the telephony manager. The database is
/// the source of truth: validation and persistence failures abort the
/// request, while audit and notifier failures after the commit are logged
/// and swallowed - the manager may transiently drift until the next
/// mutation of the same number.
pub struct StoplistCoordinator {
    stoplist_store: Arc<StoplistStore>,
    audit_logger: Arc<AuditLogger>,
    notifier: Arc<dyn StoplistNotifier>,
    policy: StoplistPolicy,
}

impl StoplistCoordinator {
    pub fn new(
        stoplist_store: Arc<StoplistStore>,
        audit_logger: Arc<AuditLogger>,
        notifier: Arc<dyn StoplistNotifier>,
        policy: StoplistPolicy,
    ) -> Self {
        Self {
            stoplist_store,
            audit_logger,
            notifier,
            policy,
        }
    }

    /// Add a number to the stoplist
    ///
    /// Rejects entries without any reason flag (policy-dependent) and
    /// numbers that are already blocked. The row is committed before the
    /// manager is notified.
    pub async fn create(
        &self,
        operator: &Operator,
        entry: NewStoplistEntry,
    ) -> Result<stoplist::Model, InternalError> {
        if self.policy.require_reason
            && !(entry.reason1 || entry.reason2 || entry.reason3 || entry.reason4)
        {
            return Err(InternalError::Validation(
                "At least one reason must be selected".to_string(),
            ));
        }

        let created = self.stoplist_store.insert(&entry, &operator.login).await?;

        tracing::info!(
            number = created.number,
            id = created.id,
            operator = %operator.login,
            "Stoplist entry created"
        );

        let summary = entry_summary(&created);
        if let Err(e) = self
            .audit_logger
            .record(operator, MutationKind::Create, created.id, &summary)
            .await
        {
            tracing::error!("Failed to write CREATE audit entry for {}: {}", created.id, e);
        }

        let playback = derive_playback(
            created.reason1,
            created.reason2,
            created.reason3,
            created.reason4,
        );
        if let Err(e) = self.notifier.db_put(created.number, &playback).await {
            tracing::warn!(
                "Telephony manager not updated for {} (entry is committed): {}",
                created.number,
                e
            );
        }

        Ok(created)
    }

    /// Apply a field-level change set to an existing entry
    ///
    /// The audit row describes only the first changed field in priority
    /// order; the playback value sent to the manager is recomputed from
    /// the full post-update flag state.
    pub async fn update(
        &self,
        operator: &Operator,
        id: i32,
        changes: StoplistChanges,
    ) -> Result<stoplist::Model, InternalError> {
        if !self.policy.allow_update {
            return Err(InternalError::UpdatesDisabled);
        }

        let before = self
            .stoplist_store
            .find_by_id(id)
            .await?
            .ok_or(InternalError::StoplistNotFound(id))?;

        let reason1 = changes.reason1.unwrap_or(before.reason1);
        let reason2 = changes.reason2.unwrap_or(before.reason2);
        let reason3 = changes.reason3.unwrap_or(before.reason3);
        let reason4 = changes.reason4.unwrap_or(before.reason4);
        if self.policy.require_reason && !(reason1 || reason2 || reason3 || reason4) {
            return Err(InternalError::Validation(
                "At least one reason must be selected".to_string(),
            ));
        }

        let after = self
            .stoplist_store
            .update(before.clone(), &changes, &operator.login)
            .await?;

        tracing::info!(
            number = after.number,
            id = after.id,
            operator = %operator.login,
            "Stoplist entry updated"
        );

        let description = describe_change(&before, &after);
        if let Err(e) = self
            .audit_logger
            .record(operator, MutationKind::Update, after.id, &description)
            .await
        {
            tracing::error!("Failed to write UPDATE audit entry for {}: {}", after.id, e);
        }

        let playback = derive_playback(after.reason1, after.reason2, after.reason3, after.reason4);
        if let Err(e) = self.notifier.db_put(after.number, &playback).await {
            tracing::warn!(
                "Telephony manager not updated for {} (entry is committed): {}",
                after.number,
                e
            );
        }

        Ok(after)
    }

    /// Remove a number from the stoplist
    ///
    /// The DELETE audit row snapshots the entry's state and is written
    /// before the row is removed, so its reference resolves at write time.
    pub async fn delete(&self, operator: &Operator, id: i32) -> Result<(), InternalError> {
        let entry = self
            .stoplist_store
            .find_by_id(id)
            .await?
            .ok_or(InternalError::StoplistNotFound(id))?;

        let summary = entry_summary(&entry);
        if let Err(e) = self
            .audit_logger
            .record(operator, MutationKind::Delete, entry.id, &summary)
            .await
        {
            tracing::error!("Failed to write DELETE audit entry for {}: {}", entry.id, e);
        }

        self.stoplist_store.delete(entry.id).await?;

        tracing::info!(
            number = entry.number,
            id = entry.id,
            operator = %operator.login,
            "Stoplist entry deleted"
        );

        if let Err(e) = self.notifier.db_del(entry.number).await {
            tracing::warn!(
                "Telephony manager still holds an override for {} (entry is removed): {}",
                entry.number,
                e
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use std::sync::Mutex;

    use crate::errors::internal::NotifierError;
    use crate::stores::{LogFilter, LogStore};

    #[derive(Debug, Clone, PartialEq)]
    enum NotifierCall {
        Put { number: i64, playback: String },
        Del { number: i64 },
    }

    /// Test double that records every command instead of talking HTTP
    struct RecordingNotifier {
        calls: Mutex<Vec<NotifierCall>>,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<NotifierCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StoplistNotifier for RecordingNotifier {
        async fn db_put(&self, number: i64, playback: &str) -> Result<(), NotifierError> {
            if self.fail {
                return Err(NotifierError::auth("manager unreachable"));
            }
            self.calls.lock().unwrap().push(NotifierCall::Put {
                number,
                playback: playback.to_string(),
            });
            Ok(())
        }

        async fn db_del(&self, number: i64) -> Result<(), NotifierError> {
            if self.fail {
                return Err(NotifierError::auth("manager unreachable"));
            }
            self.calls
                .lock()
                .unwrap()
                .push(NotifierCall::Del { number });
            Ok(())
        }
    }

    struct TestHarness {
        coordinator: StoplistCoordinator,
        stoplist_store: Arc<StoplistStore>,
        log_store: Arc<LogStore>,
        notifier: Arc<RecordingNotifier>,
    }

    async fn setup(policy: StoplistPolicy, notifier: RecordingNotifier) -> TestHarness {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let stoplist_store = Arc::new(StoplistStore::new(db.clone()));
        let log_store = Arc::new(LogStore::new(db.clone()));
        let audit_logger = Arc::new(AuditLogger::new(log_store.clone()));
        let notifier = Arc::new(notifier);

        let coordinator = StoplistCoordinator::new(
            stoplist_store.clone(),
            audit_logger,
            notifier.clone(),
            policy,
        );

        TestHarness {
            coordinator,
            stoplist_store,
            log_store,
            notifier,
        }
    }

    fn operator() -> Operator {
        Operator::new("alice", vec!["staff".to_string()])
    }

    fn new_entry(number: i64, code: i32, reasons: [bool; 4]) -> NewStoplistEntry {
        NewStoplistEntry {
            code,
            number,
            reason1: reasons[0],
            reason2: reasons[1],
            reason3: reasons[2],
            reason4: reasons[3],
        }
    }

    async fn all_logs(log_store: &LogStore) -> Vec<crate::types::db::log_entry::Model> {
        let (logs, _) = log_store.list(&LogFilter::default()).await.unwrap();
        logs
    }

    #[tokio::test]
    async fn create_without_any_reason_is_rejected_with_no_side_effects() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;

        let result = h
            .coordinator
            .create(&operator(), new_entry(5550100, 1, [false, false, false, false]))
            .await;

        assert!(matches!(result, Err(InternalError::Validation(_))));
        assert!(h
            .stoplist_store
            .find_by_number(5550100)
            .await
            .unwrap()
            .is_none());
        assert!(all_logs(&h.log_store).await.is_empty());
        assert!(h.notifier.calls().is_empty());
    }

    #[tokio::test]
    async fn create_with_duplicate_number_is_rejected_without_log_or_notification() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;
        let op = operator();

        h.coordinator
            .create(&op, new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        let result = h
            .coordinator
            .create(&op, new_entry(5550100, 2, [false, true, false, false]))
            .await;

        assert!(matches!(result, Err(InternalError::DuplicateNumber(5550100))));
        // Only the first create left any trace
        assert_eq!(all_logs(&h.log_store).await.len(), 1);
        assert_eq!(h.notifier.calls().len(), 1);
    }

    #[tokio::test]
    async fn create_persists_logs_and_notifies_in_order() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;

        let created = h
            .coordinator
            .create(&operator(), new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        assert_eq!(created.number, 5550100);
        assert_eq!(created.user.as_deref(), Some("alice"));

        let logs = all_logs(&h.log_store).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].r#type, "CREATE");
        assert_eq!(logs[0].stoplist_id, created.id);
        assert_eq!(logs[0].user, "alice");
        assert_eq!(
            logs[0].data,
            format!(
                "id={}, code=1, num=5550100, Audiotel=On, Prive=Off, Direct AUO=Off, All=Off",
                created.id
            )
        );

        assert_eq!(
            h.notifier.calls(),
            vec![NotifierCall::Put {
                number: 5550100,
                playback: "stop%2Faudiotel".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn create_derives_joined_playback_for_multiple_reasons() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;

        h.coordinator
            .create(&operator(), new_entry(5550101, 3, [true, false, true, false]))
            .await
            .unwrap();

        assert_eq!(
            h.notifier.calls(),
            vec![NotifierCall::Put {
                number: 5550101,
                playback: "stop%2Faudiotel%26stop%2Fauo".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn create_with_reason4_sends_override_playback() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;

        h.coordinator
            .create(&operator(), new_entry(5550102, 3, [true, true, true, true]))
            .await
            .unwrap();

        assert_eq!(
            h.notifier.calls(),
            vec![NotifierCall::Put {
                number: 5550102,
                playback: "stop%2Fall".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn delete_logs_before_removal_then_clears_manager_state() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;
        let op = operator();

        let created = h
            .coordinator
            .create(&op, new_entry(5550100, 1, [false, true, false, false]))
            .await
            .unwrap();

        h.coordinator.delete(&op, created.id).await.unwrap();

        // Row is gone
        assert!(h
            .stoplist_store
            .find_by_id(created.id)
            .await
            .unwrap()
            .is_none());

        // The DELETE row survives the entry and snapshots its final state
        let logs = h.log_store.find_by_stoplist_id(created.id).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[1].r#type, "DELETE");
        assert_eq!(
            logs[1].data,
            format!(
                "id={}, code=1, num=5550100, Audiotel=Off, Prive=On, Direct AUO=Off, All=Off",
                created.id
            )
        );

        let calls = h.notifier.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], NotifierCall::Del { number: 5550100 });
    }

    #[tokio::test]
    async fn update_describes_only_the_first_changed_field() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;
        let op = operator();

        let created = h
            .coordinator
            .create(&op, new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        // reason2 and code change together; the description keeps only the
        // higher-priority reason2
        let changes = StoplistChanges {
            code: Some(9),
            reason2: Some(true),
            ..Default::default()
        };
        h.coordinator.update(&op, created.id, changes).await.unwrap();

        let logs = h.log_store.find_by_stoplist_id(created.id).await.unwrap();
        assert_eq!(logs[1].r#type, "UPDATE");
        assert_eq!(logs[1].data, "Prive=On");
    }

    #[tokio::test]
    async fn update_changing_only_code_describes_code() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;
        let op = operator();

        let created = h
            .coordinator
            .create(&op, new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        let changes = StoplistChanges {
            code: Some(4),
            ..Default::default()
        };
        h.coordinator.update(&op, created.id, changes).await.unwrap();

        let logs = h.log_store.find_by_stoplist_id(created.id).await.unwrap();
        assert_eq!(logs[1].data, "Code=4");

        // Playback is recomputed from the unchanged flag state
        let calls = h.notifier.calls();
        assert_eq!(
            calls[1],
            NotifierCall::Put {
                number: 5550100,
                playback: "stop%2Faudiotel".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn update_of_missing_entry_returns_not_found() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;

        let result = h
            .coordinator
            .update(&operator(), 42, StoplistChanges::default())
            .await;

        assert!(matches!(result, Err(InternalError::StoplistNotFound(42))));
    }

    #[tokio::test]
    async fn update_is_rejected_when_policy_disables_it() {
        let policy = StoplistPolicy {
            allow_update: false,
            ..Default::default()
        };
        let h = setup(policy, RecordingNotifier::new()).await;
        let op = operator();

        let created = h
            .coordinator
            .create(&op, new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        let changes = StoplistChanges {
            code: Some(4),
            ..Default::default()
        };
        let result = h.coordinator.update(&op, created.id, changes).await;

        assert!(matches!(result, Err(InternalError::UpdatesDisabled)));
        assert_eq!(all_logs(&h.log_store).await.len(), 1);
        assert_eq!(h.notifier.calls().len(), 1);
    }

    #[tokio::test]
    async fn lenient_policy_permits_create_without_reasons() {
        let policy = StoplistPolicy {
            require_reason: false,
            ..Default::default()
        };
        let h = setup(policy, RecordingNotifier::new()).await;

        h.coordinator
            .create(&operator(), new_entry(5550100, 1, [false, false, false, false]))
            .await
            .unwrap();

        // With no reasons the mirrored value is empty
        assert_eq!(
            h.notifier.calls(),
            vec![NotifierCall::Put {
                number: 5550100,
                playback: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn notifier_failure_does_not_roll_back_the_commit() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::failing()).await;

        let created = h
            .coordinator
            .create(&operator(), new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        // Row and audit entry are still there
        assert!(h
            .stoplist_store
            .find_by_id(created.id)
            .await
            .unwrap()
            .is_some());
        assert_eq!(all_logs(&h.log_store).await.len(), 1);
    }

    #[tokio::test]
    async fn reissuing_an_identical_put_is_safe() {
        let h = setup(StoplistPolicy::default(), RecordingNotifier::new()).await;
        let op = operator();

        let created = h
            .coordinator
            .create(&op, new_entry(5550100, 1, [true, false, false, false]))
            .await
            .unwrap();

        // Two no-op updates re-issue the same DBPut; the notifier carries no
        // state so each call is a plain overwrite
        for _ in 0..2 {
            h.coordinator
                .update(&op, created.id, StoplistChanges::default())
                .await
                .unwrap();
        }

        let puts: Vec<_> = h
            .notifier
            .calls()
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    NotifierCall::Put {
                        number: 5550100,
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(puts.len(), 3);
        assert!(puts.windows(2).all(|w| w[0] == w[1]));
    }
}
