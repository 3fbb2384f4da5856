//! Snapshot repository.
//!
//! Provides site snapshot persistence operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::SnapshotsEnableConfig;
use crate::model::SiteSnapshot;
use crate::storage::{Result, SnapshotStore};

/// Repository for site snapshot operations.
///
/// Wraps a [`SnapshotStore`] with read/write enable flags. Disabling reads
/// forces full event replay (useful to verify replay produces correct
/// state); disabling writes runs pure event sourcing without persisting
/// snapshots. Both degrade to the store's "nothing found" / "not written"
/// answers rather than erroring, so callers need no special handling.
pub struct SnapshotRepository {
    store: Arc<dyn SnapshotStore>,
    /// When false, reads always report no snapshot.
    read_enabled: bool,
    /// When false, snapshots are not written.
    write_enabled: bool,
}

impl SnapshotRepository {
    /// Create a new snapshot repository with reads and writes enabled.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            read_enabled: true,
            write_enabled: true,
        }
    }

    /// Create a new snapshot repository with configured read/write behavior.
    pub fn with_config(store: Arc<dyn SnapshotStore>, snapshots: &SnapshotsEnableConfig) -> Self {
        Self {
            store,
            read_enabled: snapshots.read,
            write_enabled: snapshots.write,
        }
    }

    /// Retrieve the newest snapshot for a site, optionally bounded to
    /// versions strictly below `before_version`.
    ///
    /// Returns `None` if no snapshot qualifies, or if reads are disabled.
    pub async fn latest(
        &self,
        site_id: Uuid,
        before_version: Option<u64>,
    ) -> Result<Option<SiteSnapshot>> {
        if self.read_enabled {
            self.store.find_latest(site_id, before_version).await
        } else {
            Ok(None)
        }
    }

    /// Persist a snapshot.
    ///
    /// Returns `true` if the snapshot was stored, `false` if another
    /// writer already holds its version slot. If writes are disabled,
    /// nothing is stored and `false` is returned.
    pub async fn record(&self, snapshot: &SiteSnapshot) -> Result<bool> {
        if self.write_enabled {
            self.store.persist(snapshot).await
        } else {
            Ok(false)
        }
    }
}
