//! SnapshotStore interface tests.
//!
//! These tests verify the contract of the SnapshotStore trait.
//! Each storage implementation should run these tests.

use serde_json::{json, Value};
use uuid::Uuid;

use sitevault::model::SiteSnapshot;
use sitevault::storage::SnapshotStore;

/// Create a test snapshot at the given version.
pub fn make_snapshot(site_id: Uuid, version: u64) -> SiteSnapshot {
    SiteSnapshot::new(
        site_id,
        version,
        Uuid::new_v4(),
        json!({"name": format!("site-v{}", version), "version": version}),
    )
}

/// Create a snapshot with custom state for verification.
pub fn make_snapshot_with_state(site_id: Uuid, version: u64, state: Value) -> SiteSnapshot {
    SiteSnapshot::new(site_id, version, Uuid::new_v4(), state)
}

// =============================================================================
// SnapshotStore::find_latest tests
// =============================================================================

pub async fn test_find_latest_unknown_site<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();

    let snapshot = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed");
    assert!(snapshot.is_none(), "unknown site should have no snapshot");
}

pub async fn test_persist_then_find_latest<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();
    let snapshot = make_snapshot(site_id, 10);

    let inserted = store
        .persist(&snapshot)
        .await
        .expect("persist should succeed");
    assert!(inserted, "first persist should win the version slot");

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");

    assert_eq!(found, snapshot);
}

pub async fn test_find_latest_returns_newest<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();

    for version in [3u64, 7, 12] {
        store
            .persist(&make_snapshot(site_id, version))
            .await
            .expect("persist should succeed");
    }

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");

    assert_eq!(found.version, 12, "unbounded read should see the newest");
}

pub async fn test_find_latest_bounded<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();

    for version in [3u64, 7, 12] {
        store
            .persist(&make_snapshot(site_id, version))
            .await
            .expect("persist should succeed");
    }

    let below_ten = store
        .find_latest(site_id, Some(10))
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert_eq!(below_ten.version, 7, "bound 10 should find version 7");

    let above_all = store
        .find_latest(site_id, Some(13))
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert_eq!(above_all.version, 12, "bound above newest should find it");
}

pub async fn test_bound_excludes_exact_version<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();

    for version in [3u64, 7, 12] {
        store
            .persist(&make_snapshot(site_id, version))
            .await
            .expect("persist should succeed");
    }

    let below_newest = store
        .find_latest(site_id, Some(12))
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert_eq!(
        below_newest.version, 7,
        "a snapshot at exactly the bound must be excluded"
    );

    let below_oldest = store
        .find_latest(site_id, Some(3))
        .await
        .expect("find_latest should succeed");
    assert!(
        below_oldest.is_none(),
        "bound at the oldest version should find nothing"
    );
}

pub async fn test_state_round_trip<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();
    let state = json!({
        "name": "weather-station",
        "pages": [
            {"path": "/", "title": "Home", "widgets": ["temp", "wind"]},
            {"path": "/history", "title": "History", "widgets": []}
        ],
        "settings": {"public": true, "retention_days": 30}
    });

    store
        .persist(&make_snapshot_with_state(site_id, 5, state.clone()))
        .await
        .expect("persist should succeed");

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");

    assert_eq!(found.state, state, "state should survive storage unchanged");
}

pub async fn test_owner_preserved<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();
    let owner = Uuid::new_v4();
    let snapshot = SiteSnapshot::new(site_id, 2, owner, json!({"n": 1}));

    store
        .persist(&snapshot)
        .await
        .expect("persist should succeed");

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");

    assert_eq!(found.owner, owner);
}

// =============================================================================
// SnapshotStore::persist tests
// =============================================================================

pub async fn test_persist_duplicate_version<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();

    let first = make_snapshot_with_state(site_id, 6, json!({"writer": "first"}));
    let second = make_snapshot_with_state(site_id, 6, json!({"writer": "second"}));

    let won = store.persist(&first).await.expect("persist should succeed");
    assert!(won, "first writer should win");

    let lost = store
        .persist(&second)
        .await
        .expect("losing a race is not an error");
    assert!(!lost, "second writer should lose the version slot");

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert_eq!(
        found.state,
        json!({"writer": "first"}),
        "the stored row must stand untouched"
    );
}

pub async fn test_versions_are_per_site<S: SnapshotStore>(store: &S) {
    let site1 = Uuid::new_v4();
    let site2 = Uuid::new_v4();

    let won1 = store
        .persist(&make_snapshot(site1, 4))
        .await
        .expect("persist should succeed");
    let won2 = store
        .persist(&make_snapshot(site2, 4))
        .await
        .expect("persist should succeed");

    assert!(won1, "same version on different sites should not conflict");
    assert!(won2, "same version on different sites should not conflict");
}

pub async fn test_tombstone_round_trip<S: SnapshotStore>(store: &S) {
    let site_id = Uuid::new_v4();
    let owner = Uuid::new_v4();

    store
        .persist(&make_snapshot(site_id, 4))
        .await
        .expect("persist should succeed");
    store
        .persist(&SiteSnapshot::tombstone(site_id, 9, owner))
        .await
        .expect("persist should succeed");

    let found = store
        .find_latest(site_id, None)
        .await
        .expect("find_latest should succeed")
        .expect("tombstone should be returned, not filtered");

    assert!(found.deleted, "tombstone should read back as deleted");
    assert_eq!(found.version, 9);
    assert_eq!(found.owner, owner);

    // Bounded just above the tombstone it is still the answer
    let bounded = store
        .find_latest(site_id, Some(10))
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert!(bounded.deleted);
    assert_eq!(bounded.version, 9);

    // Bounded below the tombstone, the live snapshot is still reachable
    let live = store
        .find_latest(site_id, Some(9))
        .await
        .expect("find_latest should succeed")
        .expect("snapshot should exist");
    assert!(!live.deleted);
    assert_eq!(live.version, 4);
}

// =============================================================================
// Isolation tests
// =============================================================================

pub async fn test_site_isolation<S: SnapshotStore>(store: &S) {
    let site1 = Uuid::new_v4();
    let site2 = Uuid::new_v4();

    store
        .persist(&make_snapshot(site1, 10))
        .await
        .expect("persist should succeed");
    store
        .persist(&make_snapshot(site2, 20))
        .await
        .expect("persist should succeed");

    let snap1 = store.find_latest(site1, None).await.unwrap().unwrap();
    let snap2 = store.find_latest(site2, None).await.unwrap().unwrap();

    assert_eq!(snap1.version, 10);
    assert_eq!(snap2.version, 20);
}

// =============================================================================
// Test runner macro
// =============================================================================

/// Run all SnapshotStore interface tests against a store implementation.
#[macro_export]
macro_rules! run_snapshot_store_tests {
    ($store:expr) => {
        use $crate::storage::snapshot_store_tests::*;

        // find_latest tests
        test_find_latest_unknown_site($store).await;
        println!("  test_find_latest_unknown_site: PASSED");

        test_persist_then_find_latest($store).await;
        println!("  test_persist_then_find_latest: PASSED");

        test_find_latest_returns_newest($store).await;
        println!("  test_find_latest_returns_newest: PASSED");

        test_find_latest_bounded($store).await;
        println!("  test_find_latest_bounded: PASSED");

        test_bound_excludes_exact_version($store).await;
        println!("  test_bound_excludes_exact_version: PASSED");

        test_state_round_trip($store).await;
        println!("  test_state_round_trip: PASSED");

        test_owner_preserved($store).await;
        println!("  test_owner_preserved: PASSED");

        // persist tests
        test_persist_duplicate_version($store).await;
        println!("  test_persist_duplicate_version: PASSED");

        test_versions_are_per_site($store).await;
        println!("  test_versions_are_per_site: PASSED");

        test_tombstone_round_trip($store).await;
        println!("  test_tombstone_round_trip: PASSED");

        // isolation tests
        test_site_isolation($store).await;
        println!("  test_site_isolation: PASSED");
    };
}
