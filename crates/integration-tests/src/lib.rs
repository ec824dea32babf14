//! Integration tests for Bazaar.
//!
//! The tests under `tests/` exercise the crates together without a running
//! server:
//!
//! - `catalog_pipeline` - CSV source through catalog load, index build and
//!   recommendation
//! - `auth_flow` - signup and login against an in-memory `SQLite` database
//!
//! Run with: cargo test -p bazaar-integration-tests
