//! Snapshot model types.

use serde_json::Value;
use uuid::Uuid;

/// A point-in-time materialization of a site's event history.
///
/// `version` is the number of events folded into `state`; a snapshot at
/// version N captures the site after event N was applied. Snapshots are
/// immutable once persisted: correcting state means persisting a new
/// snapshot at a later version, not rewriting an old one.
///
/// A snapshot with `deleted` set is a tombstone: it records that the site
/// was deleted as of `version`. Tombstones flow through reads like any
/// other snapshot so callers can distinguish "never existed" from
/// "existed and was deleted".
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSnapshot {
    /// Site aggregate identifier.
    pub site_id: Uuid,
    /// Event count at the time the state was materialized.
    pub version: u64,
    /// User who owned the site when the snapshot was taken.
    pub owner: Uuid,
    /// Materialized site state.
    pub state: Value,
    /// True if the site was deleted as of this version.
    pub deleted: bool,
}

impl SiteSnapshot {
    /// Create a live (non-tombstone) snapshot.
    pub fn new(site_id: Uuid, version: u64, owner: Uuid, state: Value) -> Self {
        Self {
            site_id,
            version,
            owner,
            state,
            deleted: false,
        }
    }

    /// Create a tombstone recording that the site was deleted as of `version`.
    pub fn tombstone(site_id: Uuid, version: u64, owner: Uuid) -> Self {
        Self {
            site_id,
            version,
            owner,
            state: Value::Null,
            deleted: true,
        }
    }
}
