//! Filter and sort configuration

use super::ReadingStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// User-controlled filter/sort parameters.
///
/// Owned by the presentation layer and handed to the engine by reference on
/// every call; the engine keeps no state between calls. `Default` is the
/// single source of truth for the cleared configuration, used both at
/// startup and by the reset action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Selected tags; empty means no tag restriction
    pub tags: HashSet<String>,

    /// Selected language codes; empty means no language restriction
    pub languages: HashSet<String>,

    /// Status restriction
    pub status: StatusFilter,

    /// Sort mode for the resulting view
    pub sort_by: SortBy,

    /// Case-insensitive substring matched against title and author
    pub search_term: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            tags: HashSet::new(),
            languages: HashSet::new(),
            status: StatusFilter::Only(ReadingStatus::Read),
            sort_by: SortBy::DateRead,
            search_term: String::new(),
        }
    }
}

impl FilterConfig {
    /// Reset every dimension to the cleared defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Status dimension of the filter: a single status, or everything
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Only books with the given status
    Only(ReadingStatus),

    /// No status restriction
    All,
}

impl StatusFilter {
    /// Whether a book with the given status passes this filter
    pub fn matches(&self, status: ReadingStatus) -> bool {
        match self {
            StatusFilter::Only(wanted) => *wanted == status,
            StatusFilter::All => true,
        }
    }
}

/// Sort mode for the filtered view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Newest read date first; unread books last
    #[default]
    DateRead,

    /// Highest rating first
    Rating,
}
