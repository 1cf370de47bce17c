//! Aggregate counters over the full catalog

use crate::types::{Book, ReadingStatus};
use serde::Serialize;

/// Catalog-wide counters, independent of any filter configuration
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    /// Total number of records in the catalog
    pub total: usize,

    /// Records with status `read`
    pub read: usize,

    /// Records with status `want-to-read`
    pub want_to_read: usize,
}

/// Count the catalog. Each counter is its own equality scan so additional
/// statuses would simply fall outside both named counts rather than skew
/// them.
pub fn compute_stats(catalog: &[Book]) -> CatalogStats {
    CatalogStats {
        total: catalog.len(),
        read: catalog
            .iter()
            .filter(|b| b.status == ReadingStatus::Read)
            .count(),
        want_to_read: catalog
            .iter()
            .filter(|b| b.status == ReadingStatus::WantToRead)
            .count(),
    }
}
