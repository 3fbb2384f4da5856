//! SnapshotStore trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use super::Result;
use crate::model::SiteSnapshot;

/// Interface for site snapshot persistence.
///
/// Snapshots are an optimization to avoid replaying entire event
/// histories. When loading a site, if a snapshot exists at or below the
/// target version, events are replayed from the snapshot version onwards.
///
/// Stores are append-only: one row per `(site_id, version)`, written once
/// and never updated or deleted. Concurrent writers targeting the same
/// version race through the storage-level uniqueness guarantee; no locks
/// are taken. Tombstone snapshots (`deleted = true`) are stored and
/// returned like any other snapshot.
///
/// # Implementations
///
/// - `SqliteSnapshotStore`: SQLite storage
/// - `PostgresSnapshotStore`: PostgreSQL storage
/// - `MemorySnapshotStore`: In-memory storage for tests and ephemeral runs
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Retrieve the newest snapshot for a site, optionally bounded.
    ///
    /// With `before_version = Some(v)`, returns the snapshot with the
    /// highest version strictly below `v`; a snapshot at exactly `v` is
    /// excluded. With `None`, returns the newest snapshot outright.
    ///
    /// Returns `Ok(None)` when no snapshot satisfies the bound. Tombstones
    /// are returned, not filtered; interpreting `deleted` is the caller's
    /// concern.
    async fn find_latest(
        &self,
        site_id: Uuid,
        before_version: Option<u64>,
    ) -> Result<Option<SiteSnapshot>>;

    /// Persist a snapshot, racing concurrent writers for its version slot.
    ///
    /// Returns `Ok(true)` if this call created the row, `Ok(false)` if a
    /// snapshot for `(site_id, version)` already existed - the stored row
    /// stands and is equivalent for replay purposes. Any other failure
    /// surfaces as an error, never as `false`.
    async fn persist(&self, snapshot: &SiteSnapshot) -> Result<bool>;
}
