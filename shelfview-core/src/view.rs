//! The filter/sort engine: pure functions from (catalog, config) to an
//! ordered view.
//!
//! Every call is independent; nothing here mutates the catalog or retains
//! state. An empty result is a normal outcome, not an error.

use crate::types::{Book, FilterConfig, SortBy};
use std::cmp::Ordering;

/// Compute the filtered, sorted view of the catalog.
///
/// A book is included iff it passes every active filter dimension; within a
/// multi-select dimension (tags, languages) matching any selected value
/// suffices. Empty tag/language sets and an empty search term impose no
/// restriction. The result borrows from the catalog in input order before
/// sorting, so it is always a subsequence permuted only by the sort.
pub fn compute_view<'a>(catalog: &'a [Book], config: &FilterConfig) -> Vec<&'a Book> {
    let mut view: Vec<&Book> = catalog
        .iter()
        .filter(|book| matches_filters(book, config))
        .collect();

    apply_sorting(&mut view, config.sort_by);
    view
}

/// Whether a single book passes all four filter dimensions
fn matches_filters(book: &Book, config: &FilterConfig) -> bool {
    if !config.search_term.is_empty() {
        let term = config.search_term.to_lowercase();
        let title_match = book.title.to_lowercase().contains(&term);
        let author_match = book.author.to_lowercase().contains(&term);
        if !title_match && !author_match {
            return false;
        }
    }

    // Tag filter (union - OR logic)
    if !config.tags.is_empty() && !book.tags.iter().any(|tag| config.tags.contains(tag)) {
        return false;
    }

    // Language filter (union - OR logic)
    if !config.languages.is_empty() && !config.languages.contains(&book.language) {
        return false;
    }

    config.status.matches(book.status)
}

/// Sort a view in place. Stable: books with equal keys keep their
/// relative input order.
pub fn apply_sorting(view: &mut [&Book], sort_by: SortBy) {
    match sort_by {
        SortBy::DateRead => {
            // Present dates first, newest to oldest; unread books trail
            // regardless of their other fields.
            view.sort_by(|a, b| match (a.date_read, b.date_read) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        SortBy::Rating => {
            view.sort_by(|a, b| b.rating.cmp(&a.rating));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReadingStatus, StatusFilter};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small_catalog() -> Vec<Book> {
        vec![
            Book::new("Dune", "Frank Herbert", "EN")
                .with_rating(5)
                .with_date_read(date(2024, 1, 15))
                .with_tag("Sci-Fi")
                .with_tag("Classic"),
            Book::new("Norwegian Wood", "Haruki Murakami", "EN")
                .with_rating(4)
                .with_tag("Contemporary"),
            Book::new("Le Petit Prince", "Antoine de Saint-Exupéry", "FR")
                .with_rating(5)
                .with_date_read(date(2024, 3, 10))
                .with_tag("Classic"),
        ]
    }

    #[test]
    fn test_search_matches_title_and_author_case_insensitively() {
        let catalog = small_catalog();
        let mut config = FilterConfig {
            status: StatusFilter::All,
            ..Default::default()
        };

        config.search_term = "DUNE".to_string();
        let view = compute_view(&catalog, &config);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Dune");

        config.search_term = "murakami".to_string();
        let view = compute_view(&catalog, &config);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Norwegian Wood");
    }

    #[test]
    fn test_tag_filter_uses_union_semantics() {
        let catalog = small_catalog();
        let config = FilterConfig {
            tags: ["Sci-Fi".to_string(), "Contemporary".to_string()]
                .into_iter()
                .collect(),
            status: StatusFilter::All,
            ..Default::default()
        };

        let view = compute_view(&catalog, &config);
        let titles: Vec<_> = view.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Norwegian Wood"]);
    }

    #[test]
    fn test_language_filter() {
        let catalog = small_catalog();
        let config = FilterConfig {
            languages: ["FR".to_string()].into_iter().collect(),
            status: StatusFilter::All,
            ..Default::default()
        };

        let view = compute_view(&catalog, &config);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Le Petit Prince");
    }

    #[test]
    fn test_status_filter_is_restrictive_only_when_not_all() {
        let catalog = small_catalog();

        let read_only = compute_view(&catalog, &FilterConfig::default());
        assert!(read_only.iter().all(|b| b.status == ReadingStatus::Read));
        assert_eq!(read_only.len(), 2);

        let all = compute_view(
            &catalog,
            &FilterConfig {
                status: StatusFilter::All,
                ..Default::default()
            },
        );
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_date_sort_places_unread_last() {
        let catalog = small_catalog();
        let config = FilterConfig {
            status: StatusFilter::All,
            ..Default::default()
        };

        let view = compute_view(&catalog, &config);
        let titles: Vec<_> = view.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Le Petit Prince", "Dune", "Norwegian Wood"]);
    }

    #[test]
    fn test_rating_sort_is_stable_for_ties() {
        let catalog = vec![
            Book::new("A", "x", "EN").with_rating(4),
            Book::new("B", "x", "EN").with_rating(5),
            Book::new("C", "x", "EN").with_rating(4),
        ];
        let config = FilterConfig {
            status: StatusFilter::All,
            sort_by: SortBy::Rating,
            ..Default::default()
        };

        let view = compute_view(&catalog, &config);
        let titles: Vec<_> = view.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_view_is_valid() {
        let catalog = small_catalog();
        let config = FilterConfig {
            search_term: "no such book".to_string(),
            ..Default::default()
        };
        assert!(compute_view(&catalog, &config).is_empty());
    }

    #[test]
    fn test_book_without_tags_never_matches_tag_filter() {
        let catalog = vec![Book::new("Untagged", "x", "EN").with_status(ReadingStatus::Read)];
        let config = FilterConfig {
            tags: ["Classic".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert!(compute_view(&catalog, &config).is_empty());
    }
}
