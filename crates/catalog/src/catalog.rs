//! The immutable in-memory product catalog.

use std::cmp::Ordering;
use std::path::Path;

use thiserror::Error;

use crate::product::{Product, RawRecord};

/// Errors the catalog reports to its consumers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The source could not be loaded or was empty after filtering.
    /// Permanent for the process lifetime; consumers should degrade
    /// gracefully rather than treat this as a lookup miss.
    #[error("product catalog is unavailable")]
    Unavailable,

    /// No product with the requested identifier.
    #[error("no product with id {0}")]
    NotFound(String),
}

/// An ordered, immutable collection of products.
///
/// Built once from the source file at startup. There is no update or delete
/// path; the collection never changes for the lifetime of the process.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a CSV source file.
    ///
    /// Rows missing a required column or carrying an unparseable rating are
    /// dropped and counted; remaining rows keep source order. Duplicate
    /// product ids are kept as-is. An unreadable source yields an empty
    /// catalog rather than an error - consumers must treat the empty catalog
    /// as a valid, permanent state for this run.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read_source(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    products = catalog.len(),
                    "catalog loaded"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load catalog source, serving empty catalog"
                );
                Self::default()
            }
        }
    }

    /// Build a catalog from already-validated products, in the given order.
    ///
    /// Used by tests and tooling; `load` is the production entry point.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    fn read_source(path: &Path) -> Result<Self, csv::Error> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut products = Vec::new();
        let mut dropped = 0_usize;

        for row in reader.deserialize::<RawRecord>() {
            match row {
                Ok(raw) => match raw.validate() {
                    Some(product) => products.push(product),
                    None => dropped += 1,
                },
                // A malformed row is dropped like an incomplete one; only a
                // source-level failure (missing file, bad header) aborts.
                Err(e) => {
                    tracing::debug!(error = %e, "skipping malformed catalog row");
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, kept = products.len(), "dropped catalog rows");
        }

        Ok(Self { products })
    }

    /// Look up a product by identifier.
    ///
    /// Returns the first matching record in load order. Distinguishes the
    /// degraded empty-catalog state (`Unavailable`) from a genuine miss
    /// (`NotFound`) so the page layer can render a configuration error
    /// instead of a missing-product error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the catalog is empty and
    /// [`CatalogError::NotFound`] when no row has the identifier.
    pub fn get(&self, product_id: &str) -> Result<&Product, CatalogError> {
        if self.products.is_empty() {
            return Err(CatalogError::Unavailable);
        }
        self.products
            .iter()
            .find(|p| p.product_id == product_id)
            .ok_or_else(|| CatalogError::NotFound(product_id.to_owned()))
    }

    /// Ordinal position of the first product with this identifier.
    #[must_use]
    pub fn position(&self, product_id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.product_id == product_id)
    }

    /// The `n` highest-rated products, descending. Ties keep load order.
    #[must_use]
    pub fn top_rated(&self, n: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        // Stable sort: equal ratings preserve catalog order. Ratings are
        // finite by construction, so the comparison never sees NaN.
        ranked.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    /// All products in load order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use std::path::PathBuf;

    use super::*;

    pub(crate) fn product(id: &str, name: &str, about: &str, rating: f64) -> Product {
        Product {
            product_id: id.to_string(),
            name: name.to_string(),
            about: about.to_string(),
            discounted_price: "₹399".to_string(),
            actual_price: "₹999".to_string(),
            rating,
            image_url: format!("https://example.com/{id}.jpg"),
        }
    }

    fn write_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bazaar-catalog-{name}-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    const HEADER: &str = "product_id,product_name,about_product,discounted_price,actual_price,rating,img_link\n";

    #[test]
    fn test_load_keeps_source_order_and_drops_bad_rows() {
        let csv = format!(
            "{HEADER}\
             A,Mouse,Ergonomic mouse,399,999,4.5,http://img/a\n\
             B,Keyboard,,499,1299,|,http://img/b\n\
             C,Blender,Steel jar,1999,3999,4.8,http://img/c\n\
             D,Lamp,Desk lamp,299,599,4.1,\n"
        );
        let path = write_csv("order", &csv);
        let catalog = Catalog::load(&path);

        // B dropped (unparseable rating), D dropped (missing img_link).
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].product_id, "A");
        assert_eq!(catalog.products()[1].product_id, "C");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_missing_file_yields_empty_catalog() {
        let catalog = Catalog::load("/nonexistent/bazaar-catalog.csv");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get_returns_equal_record_for_every_product() {
        let products = vec![
            product("A", "Mouse", "wireless", 4.5),
            product("B", "Keyboard", "mechanical", 4.2),
        ];
        let catalog = Catalog::from_products(products.clone());
        for p in &products {
            assert_eq!(catalog.get(&p.product_id).unwrap(), p);
        }
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let catalog = Catalog::from_products(vec![product("A", "Mouse", "", 4.5)]);
        assert_eq!(
            catalog.get("ZZZ"),
            Err(CatalogError::NotFound("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_get_on_empty_catalog_is_unavailable() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get("A"), Err(CatalogError::Unavailable));
    }

    #[test]
    fn test_get_duplicate_id_returns_first_match() {
        let catalog = Catalog::from_products(vec![
            product("A", "First", "", 4.0),
            product("A", "Second", "", 4.9),
        ]);
        assert_eq!(catalog.get("A").unwrap().name, "First");
        assert_eq!(catalog.position("A"), Some(0));
    }

    #[test]
    fn test_top_rated_descending_with_stable_ties() {
        let catalog = Catalog::from_products(vec![
            product("A", "Mouse", "", 4.1),
            product("B", "Keyboard", "", 4.8),
            product("C", "Blender", "", 4.1),
            product("D", "Lamp", "", 4.8),
        ]);
        let top: Vec<&str> = catalog
            .top_rated(10)
            .iter()
            .map(|p| p.product_id.as_str())
            .collect();
        // 4.8 ties keep B before D; 4.1 ties keep A before C.
        assert_eq!(top, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_top_rated_caps_at_n() {
        let catalog = Catalog::from_products(vec![
            product("A", "Mouse", "", 4.1),
            product("B", "Keyboard", "", 4.8),
            product("C", "Blender", "", 4.5),
        ]);
        let top = catalog.top_rated(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_id, "B");
    }

    #[test]
    fn test_top_rated_on_empty_catalog_is_empty() {
        assert!(Catalog::default().top_rated(5).is_empty());
    }
}
