//! In-memory implementation of the snapshot store.
//!
//! Backs tests and ephemeral runs where nothing may touch disk. Snapshots
//! are lost on restart.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::codec;
use crate::model::SiteSnapshot;
use crate::storage::{Result, SnapshotStore};

struct StoredRow {
    owner: Uuid,
    blob: Vec<u8>,
    deleted: bool,
}

/// In-memory snapshot store.
///
/// Rows are held per site in a version-ordered map; `persist` is a
/// conditional insert under a write lock, giving the same single-winner
/// guarantee the SQL backends get from their primary key. State is kept
/// encoded so reads exercise the same codec path as the SQL backends.
#[derive(Default)]
pub struct MemorySnapshotStore {
    sites: RwLock<HashMap<Uuid, BTreeMap<u64, StoredRow>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshot rows held across all sites.
    pub async fn stored_count(&self) -> usize {
        self.sites.read().await.values().map(BTreeMap::len).sum()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn find_latest(
        &self,
        site_id: Uuid,
        before_version: Option<u64>,
    ) -> Result<Option<SiteSnapshot>> {
        let sites = self.sites.read().await;

        let versions = match sites.get(&site_id) {
            Some(versions) => versions,
            None => return Ok(None),
        };

        let upper = match before_version {
            Some(v) => Bound::Excluded(v),
            None => Bound::Unbounded,
        };

        match versions.range((Bound::Unbounded, upper)).next_back() {
            Some((version, row)) => {
                let state = codec::decode_state(&row.blob)?;
                Ok(Some(SiteSnapshot {
                    site_id,
                    version: *version,
                    owner: row.owner,
                    state,
                    deleted: row.deleted,
                }))
            }
            None => Ok(None),
        }
    }

    async fn persist(&self, snapshot: &SiteSnapshot) -> Result<bool> {
        let blob = codec::encode_state(&snapshot.state)?;

        let mut sites = self.sites.write().await;
        let versions = sites.entry(snapshot.site_id).or_default();

        match versions.entry(snapshot.version) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(StoredRow {
                    owner: snapshot.owner,
                    blob,
                    deleted: snapshot.deleted,
                });
                Ok(true)
            }
        }
    }
}
