// Store-level search, filter and uniqueness behavior

mod common;

use common::setup_test_db;
use stoplist_backend::errors::InternalError;
use stoplist_backend::stores::{StoplistFilter, StoplistStore};
use stoplist_backend::types::internal::stoplist::{NewStoplistEntry, StoplistChanges};

fn entry(number: i64, code: i32) -> NewStoplistEntry {
    NewStoplistEntry {
        code,
        number,
        reason1: true,
        reason2: false,
        reason3: false,
        reason4: false,
    }
}

async fn store_with_entries() -> StoplistStore {
    let db = setup_test_db().await;
    let store = StoplistStore::new(db);
    store.insert(&entry(5550100, 1), "alice").await.unwrap();
    store.insert(&entry(5550111, 2), "alice").await.unwrap();
    store.insert(&entry(7770200, 2), "bob").await.unwrap();
    store
}

#[tokio::test]
async fn duplicate_number_surfaces_as_a_distinct_error() {
    let db = setup_test_db().await;
    let store = StoplistStore::new(db);

    store.insert(&entry(5550100, 1), "alice").await.unwrap();
    let result = store.insert(&entry(5550100, 9), "bob").await;

    assert!(matches!(result, Err(InternalError::DuplicateNumber(5550100))));
}

#[tokio::test]
async fn search_matches_number_substring() {
    let store = store_with_entries().await;

    let filter = StoplistFilter {
        search: Some("555".to_string()),
        ..Default::default()
    };
    let (entries, total) = store.list(&filter).await.unwrap();

    assert_eq!(total, 2);
    assert!(entries.iter().all(|e| e.number.to_string().contains("555")));
}

#[tokio::test]
async fn exact_filters_narrow_the_listing() {
    let store = store_with_entries().await;

    let filter = StoplistFilter {
        code: Some(2),
        ..Default::default()
    };
    let (entries, total) = store.list(&filter).await.unwrap();
    assert_eq!(total, 2);
    assert!(entries.iter().all(|e| e.code == 2));

    let filter = StoplistFilter {
        number: Some(7770200),
        ..Default::default()
    };
    let (entries, _) = store.list(&filter).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user.as_deref(), Some("bob"));
}

#[tokio::test]
async fn limit_and_offset_page_through_results() {
    let store = store_with_entries().await;

    let filter = StoplistFilter {
        limit: Some(2),
        ..Default::default()
    };
    let (page, total) = store.list(&filter).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);

    let filter = StoplistFilter {
        limit: Some(2),
        offset: Some(2),
        ..Default::default()
    };
    let (page, _) = store.list(&filter).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn update_refreshes_operator_stamp_and_timestamps() {
    let db = setup_test_db().await;
    let store = StoplistStore::new(db);

    let created = store.insert(&entry(5550100, 1), "alice").await.unwrap();

    let changes = StoplistChanges {
        code: Some(5),
        ..Default::default()
    };
    let updated = store.update(created.clone(), &changes, "bob").await.unwrap();

    assert_eq!(updated.code, 5);
    assert_eq!(updated.user.as_deref(), Some("bob"));
    assert_eq!(updated.created_on, created.created_on);
    assert!(updated.updated_on >= created.updated_on);
}

#[tokio::test]
async fn update_to_a_taken_number_is_a_duplicate_error() {
    let db = setup_test_db().await;
    let store = StoplistStore::new(db);

    store.insert(&entry(5550100, 1), "alice").await.unwrap();
    let second = store.insert(&entry(5550200, 1), "alice").await.unwrap();

    let changes = StoplistChanges {
        number: Some(5550100),
        ..Default::default()
    };
    let result = store.update(second, &changes, "alice").await;

    assert!(matches!(result, Err(InternalError::DuplicateNumber(5550100))));
}
