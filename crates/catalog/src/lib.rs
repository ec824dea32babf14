//! Bazaar Catalog - Product catalog store and similarity index.
//!
//! This crate provides the two data structures at the heart of the storefront:
//!
//! - [`Catalog`] - an immutable, ordered collection of [`Product`] records
//!   loaded from a CSV source file. Incomplete rows are dropped at load time;
//!   an unreadable source degrades to an empty catalog instead of failing.
//! - [`SimilarityIndex`] - a precomputed pairwise cosine-similarity matrix
//!   over TF-IDF vectors of each product's text, answering "products similar
//!   to this one" queries.
//!
//! # Architecture
//!
//! Both structures are built once at process startup and never mutate
//! afterwards, so they can be shared freely across request-handling tasks.
//! A changed source file requires a process restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod catalog;
mod product;
mod similarity;
mod text;

pub use catalog::{Catalog, CatalogError};
pub use product::Product;
pub use similarity::{DEFAULT_RECOMMENDATIONS, SimilarityIndex};
