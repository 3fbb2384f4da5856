//! Database schema definitions using sea-query.
//!
//! These define the table and column identifiers for type-safe query building.

use sea_query::Iden;

/// Snapshots table schema.
#[derive(Iden)]
pub enum Snapshots {
    Table,
    #[iden = "site_id"]
    SiteId,
    #[iden = "version"]
    Version,
    #[iden = "owner"]
    Owner,
    #[iden = "blob"]
    Blob,
    #[iden = "deleted"]
    Deleted,
}

/// Name of the snapshots primary key constraint.
///
/// Backends that report constraint names on unique violations (PostgreSQL)
/// use this to pin conflict classification to the `(site_id, version)` key.
pub const SNAPSHOTS_PKEY: &str = "snapshots_pkey";

/// SQL for creating the snapshots table on SQLite.
///
/// Site and owner identifiers are 16-byte blobs. The descending key order
/// matches the dominant access pattern: newest snapshot below a bound.
pub const CREATE_SNAPSHOTS_TABLE_SQLITE: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    site_id BLOB NOT NULL,
    version INTEGER NOT NULL,
    owner BLOB NOT NULL,
    blob BLOB NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (site_id, version DESC)
);
"#;

/// SQL for creating the snapshots table on PostgreSQL.
///
/// PostgreSQL rejects key order in a PRIMARY KEY constraint; the backing
/// b-tree index is scanned backwards for newest-first reads. The constraint
/// is named so unique violations can be attributed to it.
pub const CREATE_SNAPSHOTS_TABLE_POSTGRES: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    site_id UUID NOT NULL,
    version BIGINT NOT NULL,
    owner UUID NOT NULL,
    blob BYTEA NOT NULL,
    deleted BOOLEAN NOT NULL DEFAULT FALSE,
    CONSTRAINT snapshots_pkey PRIMARY KEY (site_id, version)
);
"#;
