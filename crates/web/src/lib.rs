//! Bazaar Web - session-authenticated product catalog storefront.
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side templates
//! - `bazaar-catalog` for the product catalog and similarity index, built
//!   once at startup and shared read-only across handlers
//! - SQLite (via sqlx) for the credential table and session store
//! - tower-sessions cookie sessions; Argon2 password hashing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
