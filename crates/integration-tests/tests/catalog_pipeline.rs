//! End-to-end catalog pipeline tests.
//!
//! Each test drives a CSV source file through the full pipeline: load,
//! validation, similarity index build and recommendation.

use std::path::PathBuf;

use bazaar_catalog::{Catalog, SimilarityIndex};

const HEADER: &str =
    "product_id,product_name,about_product,discounted_price,actual_price,rating,img_link\n";

/// Write a CSV source into the temp directory and return its path.
fn write_source(name: &str, rows: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "bazaar-it-{name}-{}.csv",
        std::process::id()
    ));
    std::fs::write(&path, format!("{HEADER}{rows}")).expect("Failed to write CSV fixture");
    path
}

// ============================================================================
// Load & Recommend
// ============================================================================

#[test]
fn test_csv_source_to_recommendations() {
    let rows = "\
M1,Wireless Mouse,Ergonomic wireless mouse with USB receiver,₹399,₹999,4.2,http://img/m1\n\
M2,Wireless Gaming Mouse,Wireless mouse with adjustable DPI for gaming,₹799,₹1499,4.4,http://img/m2\n\
K1,Mechanical Keyboard,Clicky mechanical keyboard with RGB lighting,₹1999,₹3999,4.6,http://img/k1\n";
    let path = write_source("recommend", rows);

    let catalog = Catalog::load(&path);
    assert_eq!(catalog.len(), 3);

    let index = SimilarityIndex::build(&catalog);
    assert!(index.is_ready());

    // Both mice share "wireless" and "mouse"; the keyboard shares nothing.
    let similar = index.recommend(&catalog, "M1", 20);
    assert_eq!(similar.len(), 2);
    assert_eq!(similar[0].product_id, "M2");
    assert_eq!(similar[1].product_id, "K1");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_recommendation_panel_is_capped() {
    let rows: String = (0..30)
        .map(|i| format!("P{i},Copper Wire Spool,Insulated copper wire spool,₹99,₹199,4.0,http://img/p{i}\n"))
        .collect();
    let path = write_source("capped", &rows);

    let catalog = Catalog::load(&path);
    let index = SimilarityIndex::build(&catalog);

    let similar = index.recommend(&catalog, "P0", 20);
    assert_eq!(similar.len(), 20);
    assert!(similar.iter().all(|p| p.product_id != "P0"));

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unparseable_ratings_are_dropped() {
    let rows = "\
A1,Desk Lamp,LED desk lamp,₹499,₹999,4.1,http://img/a1\n\
A2,Desk Fan,Small desk fan,₹699,₹1299,|,http://img/a2\n\
A3,Desk Mat,Large desk mat,₹299,₹599,,http://img/a3\n";
    let path = write_source("ratings", rows);

    let catalog = Catalog::load(&path);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.products()[0].product_id, "A1");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_rows_missing_required_fields_are_dropped() {
    let rows = "\
B1,,Has no name,₹499,₹999,4.1,http://img/b1\n\
B2,Has Name,Complete row,₹499,₹999,4.1,http://img/b2\n";
    let path = write_source("required", rows);

    let catalog = Catalog::load(&path);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.products()[0].product_id, "B2");

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Degraded States
// ============================================================================

#[test]
fn test_missing_source_yields_empty_index() {
    let catalog = Catalog::load("/nonexistent/bazaar-it-missing.csv");
    assert!(catalog.is_empty());

    let index = SimilarityIndex::build(&catalog);
    assert!(!index.is_ready());
    assert!(index.recommend(&catalog, "M1", 20).is_empty());
}

#[test]
fn test_source_with_only_invalid_rows_yields_empty_index() {
    let rows = "C1,,,,,not-a-number,\n";
    let path = write_source("all-invalid", rows);

    let catalog = Catalog::load(&path);
    assert!(catalog.is_empty());
    assert!(!SimilarityIndex::build(&catalog).is_ready());

    std::fs::remove_file(&path).ok();
}
