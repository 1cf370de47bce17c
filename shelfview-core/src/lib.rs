//! Shelfview Core Library
//!
//! This crate provides the core types and filtering logic for the Shelfview
//! book catalog browser. A catalog is loaded once, then every interaction is
//! a pure function call: `(catalog, config) -> ordered view + stats`.

pub mod catalog;
pub mod error;
pub mod language;
pub mod stats;
pub mod types;
pub mod view;

pub use catalog::Catalog;
pub use error::{Result, ShelfviewError};
pub use language::language_name;
pub use stats::{compute_stats, CatalogStats};
pub use types::{Book, FilterConfig, ReadingStatus, SortBy, StatusFilter};
pub use view::{apply_sorting, compute_view};
