// End-to-end mutation lifecycle: create, update, delete, and the audit
// trail and manager commands each step leaves behind.

mod common;

use common::{setup_pipeline, NotifierCall};
use stoplist_backend::config::StoplistPolicy;
use stoplist_backend::stores::LogFilter;
use stoplist_backend::types::internal::stoplist::{NewStoplistEntry, StoplistChanges};
use stoplist_backend::types::internal::Operator;

fn operator(login: &str) -> Operator {
    Operator::new(login, vec!["staff".to_string()])
}

fn entry(number: i64) -> NewStoplistEntry {
    NewStoplistEntry {
        code: 2,
        number,
        reason1: false,
        reason2: true,
        reason3: false,
        reason4: false,
    }
}

#[tokio::test]
async fn full_lifecycle_leaves_a_complete_audit_trail() {
    let h = setup_pipeline(StoplistPolicy::default()).await;
    let op = operator("alice");

    // Create
    let created = h.coordinator.create(&op, entry(5550100)).await.unwrap();
    assert_eq!(created.user.as_deref(), Some("alice"));

    // Update by a different operator
    let bob = operator("bob");
    let changes = StoplistChanges {
        reason4: Some(true),
        ..Default::default()
    };
    let updated = h.coordinator.update(&bob, created.id, changes).await.unwrap();
    assert_eq!(updated.user.as_deref(), Some("bob"));
    assert!(updated.reason4);

    // Delete
    h.coordinator.delete(&bob, created.id).await.unwrap();
    assert!(h
        .stoplist_store
        .find_by_id(created.id)
        .await
        .unwrap()
        .is_none());

    // The journal kept every step, in order, with the acting operator
    let logs = h.log_store.find_by_stoplist_id(created.id).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(
        logs.iter().map(|l| l.r#type.as_str()).collect::<Vec<_>>(),
        vec!["CREATE", "UPDATE", "DELETE"]
    );
    assert_eq!(logs[0].user, "alice");
    assert_eq!(logs[1].user, "bob");
    assert_eq!(logs[1].data, "All=On");
    // The delete snapshot reflects the state after the update
    assert!(logs[2].data.contains("All=On"));

    // Manager saw put, put (override playback), del
    assert_eq!(
        h.notifier.calls(),
        vec![
            NotifierCall::Put {
                number: 5550100,
                playback: "stop%2Fprive".to_string(),
            },
            NotifierCall::Put {
                number: 5550100,
                playback: "stop%2Fall".to_string(),
            },
            NotifierCall::Del { number: 5550100 },
        ]
    );
}

#[tokio::test]
async fn journal_rows_outlive_their_entry_and_stay_searchable() {
    let h = setup_pipeline(StoplistPolicy::default()).await;
    let op = operator("alice");

    let created = h.coordinator.create(&op, entry(5550123)).await.unwrap();
    h.coordinator.delete(&op, created.id).await.unwrap();

    // Row is gone but both journal rows remain reachable through the
    // regular listing filters
    let filter = LogFilter {
        stoplist_id: Some(created.id),
        ..Default::default()
    };
    let (logs, total) = h.log_store.list(&filter).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(logs.len(), 2);

    // And by substring search over the recorded data
    let filter = LogFilter {
        search: Some("5550123".to_string()),
        ..Default::default()
    };
    let (logs, _) = h.log_store.list(&filter).await.unwrap();
    assert_eq!(logs.len(), 2);
}

#[tokio::test]
async fn failed_create_leaves_no_trace_at_all() {
    let h = setup_pipeline(StoplistPolicy::default()).await;
    let op = operator("alice");

    // Policy rejection
    let no_reasons = NewStoplistEntry {
        code: 1,
        number: 5550150,
        reason1: false,
        reason2: false,
        reason3: false,
        reason4: false,
    };
    assert!(h.coordinator.create(&op, no_reasons).await.is_err());

    // Duplicate rejection
    h.coordinator.create(&op, entry(5550160)).await.unwrap();
    assert!(h.coordinator.create(&op, entry(5550160)).await.is_err());

    let (logs, _) = h.log_store.list(&LogFilter::default()).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(h.notifier.calls().len(), 1);
}

#[tokio::test]
async fn concurrent_entries_for_different_numbers_are_independent() {
    let h = setup_pipeline(StoplistPolicy::default()).await;
    let op = operator("alice");

    let first = h.coordinator.create(&op, entry(5550201)).await.unwrap();
    let second = h.coordinator.create(&op, entry(5550202)).await.unwrap();

    h.coordinator.delete(&op, first.id).await.unwrap();

    // Deleting one number leaves the other untouched
    assert!(h
        .stoplist_store
        .find_by_number(5550202)
        .await
        .unwrap()
        .is_some());
    let logs = h.log_store.find_by_stoplist_id(second.id).await.unwrap();
    assert_eq!(logs.len(), 1);
}
