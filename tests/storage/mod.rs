//! Shared storage integration tests.
//!
//! Tests the SnapshotStore interface against all implementations.
//! Each implementation module imports these test functions and runs them.

pub mod snapshot_store_tests;
