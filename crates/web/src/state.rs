//! Application state shared across handlers.

use std::sync::Arc;

use bazaar_catalog::{Catalog, SimilarityIndex};
use sqlx::SqlitePool;

use crate::config::AppConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog and similarity index are built
/// once before the server starts and never mutate, so handlers read them
/// without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: SqlitePool,
    catalog: Catalog,
    index: SimilarityIndex,
}

impl AppState {
    /// Create a new application state from the startup artifacts.
    #[must_use]
    pub fn new(
        config: AppConfig,
        pool: SqlitePool,
        catalog: Catalog,
        index: SimilarityIndex,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                index,
            }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the similarity index.
    #[must_use]
    pub fn index(&self) -> &SimilarityIndex {
        &self.inner.index
    }
}
