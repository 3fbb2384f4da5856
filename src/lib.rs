//! Sitevault - snapshot persistence for event-sourced sites
//!
//! Write-once storage of materialized site state. Rebuilding a site by
//! replaying its full event history gets slower as the history grows;
//! snapshots let readers start from the newest persisted state below the
//! version they need and replay only the tail.
//!
//! Rows are immutable once written: one snapshot per `(site_id, version)`,
//! concurrent writers race through the primary key and the loser learns it
//! lost without an error. Deletion is recorded as a tombstone snapshot,
//! never by removing rows.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sitevault::config::Config;
//! use sitevault::storage::init_storage;
//!
//! let config = Config::load(None)?;
//! let store = init_storage(&config.storage).await?;
//!
//! let won = store.persist(&snapshot).await?;
//! if !won {
//!     // another writer already persisted this version; theirs stands
//! }
//!
//! let latest = store.find_latest(site_id, None).await?;
//! ```

pub mod codec;
pub mod config;
pub mod model;
pub mod repository;
pub mod storage;
pub mod utils;
