//! Conflict classification for snapshot writes.
//!
//! `persist` reports a lost write race as `Ok(false)`, which requires
//! telling "another writer holds this version slot" apart from every other
//! database failure. That judgment is backend-specific and lives here so
//! the stores themselves stay free of driver error inspection.

use crate::storage::schema::SNAPSHOTS_PKEY;

/// Classify a database error as a snapshot version conflict.
///
/// True only for unique constraint violations, which in the snapshots
/// schema can only mean a concurrent writer already persisted this
/// `(site_id, version)`. PostgreSQL reports which constraint fired and the
/// name is checked against the primary key; SQLite does not report one,
/// and the primary key is the table's only uniqueness constraint.
///
/// Everything else - connectivity, syntax, missing table, pool shutdown -
/// is not a conflict and must surface as an error.
pub fn is_version_conflict(err: &sqlx::Error) -> bool {
    let db_err = match err.as_database_error() {
        Some(db_err) => db_err,
        None => return false,
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    match db_err.constraint() {
        Some(name) => name == SNAPSHOTS_PKEY,
        None => true,
    }
}
