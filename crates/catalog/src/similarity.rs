//! Pairwise product similarity over TF-IDF vectors.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::product::Product;
use crate::text;

/// Default number of similar products returned by a query.
pub const DEFAULT_RECOMMENDATIONS: usize = 20;

/// Precomputed cosine-similarity index over the catalog.
///
/// Built once at startup and immutable afterwards. Rows and columns of the
/// matrix are the catalog's ordinal positions; the index never copies product
/// identity, so it stays in lockstep with the catalog by construction order.
/// A changed catalog requires a fresh index.
///
/// The full dense matrix is materialized up front. At the catalog's scale
/// this is a few megabytes; queries are then a single row scan.
#[derive(Debug)]
pub enum SimilarityIndex {
    /// The catalog was empty at startup. Terminal; every query returns an
    /// empty result rather than an error.
    Empty,
    /// The matrix is built. Terminal; no rebuild operation exists.
    Ready {
        /// Symmetric pairwise cosine similarities, `matrix[i][j] in [0, 1]`.
        matrix: Vec<Vec<f64>>,
    },
}

impl SimilarityIndex {
    /// Build the index from the catalog.
    ///
    /// Each product contributes the document `name + " " + about`; documents
    /// are TF-IDF vectorized with English stop words removed, and the full
    /// pairwise cosine matrix is computed. An empty catalog yields the
    /// [`SimilarityIndex::Empty`] sentinel.
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        if catalog.is_empty() {
            tracing::warn!("catalog is empty, similarity index unavailable");
            return Self::Empty;
        }

        let documents: Vec<String> = catalog.products().iter().map(Product::document).collect();
        let vectors = text::vectorize(&documents);

        let n = vectors.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let score = text::dot(&vectors[i], &vectors[j]);
                matrix[i][j] = score;
                matrix[j][i] = score;
            }
        }

        tracing::info!(products = n, "similarity index built");
        Self::Ready { matrix }
    }

    /// Whether the index was built from a non-empty catalog.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Cosine similarity between two catalog positions, if both exist.
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Ready { matrix } => matrix.get(i)?.get(j).copied(),
        }
    }

    /// The `k` products most similar to `product_id`, most similar first.
    ///
    /// Resolves the identifier to its first catalog position and ranks all
    /// other positions by similarity, descending; ties keep catalog order and
    /// the queried position itself is excluded. An unknown identifier or an
    /// unavailable index returns an empty sequence - "no recommendations" is
    /// a defined outcome, not a failure.
    #[must_use]
    pub fn recommend<'a>(
        &self,
        catalog: &'a Catalog,
        product_id: &str,
        k: usize,
    ) -> Vec<&'a Product> {
        let Self::Ready { matrix } = self else {
            return Vec::new();
        };
        let Some(idx) = catalog.position(product_id) else {
            return Vec::new();
        };
        let Some(row) = matrix.get(idx) else {
            return Vec::new();
        };

        let mut order: Vec<usize> = (0..row.len()).filter(|&j| j != idx).collect();
        // Stable sort: equal similarities keep the catalog's relative order.
        order.sort_by(|&a, &b| row[b].partial_cmp(&row[a]).unwrap_or(Ordering::Equal));
        order
            .into_iter()
            .take(k)
            .filter_map(|j| catalog.products().get(j))
            .collect()
    }
}
