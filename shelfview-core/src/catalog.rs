//! Catalog loading, tolerant parsing, and the built-in sample fallback

use crate::error::Result;
use crate::types::{Book, ReadingStatus};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::ops::Deref;
use std::path::Path;

/// The full, unfiltered book collection for a session.
///
/// Loaded once and treated as read-only afterwards. `skipped` records how
/// many entries of the source document failed to deserialize and were
/// dropped; callers may want to surface that count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub skipped: usize,
}

/// Wire shape of the catalog document
#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    books: Vec<Value>,
}

impl Deref for Catalog {
    type Target = [Book];

    fn deref(&self) -> &[Book] {
        &self.books
    }
}

impl Catalog {
    /// Parse a catalog document of the form `{ "books": [ ... ] }`.
    ///
    /// Entries are deserialized one by one: a malformed entry is skipped
    /// and counted, never allowed to fail the rest of the document. A
    /// document that is not the expected shape at all is an error.
    pub fn parse(data: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(data)?;

        let mut books = Vec::with_capacity(document.books.len());
        let mut skipped = 0;
        for entry in document.books {
            match serde_json::from_value::<Book>(entry) {
                Ok(book) => books.push(book),
                Err(_) => skipped += 1,
            }
        }

        Ok(Self { books, skipped })
    }

    /// Load a catalog document from a file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::parse(&data)
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The built-in fallback collection, substituted when the catalog
    /// source cannot be read. Six well-known books with literal data.
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);

        let books = vec![
            Book {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1555447414i/44767458.jpg".to_string(),
                rating: 5,
                date_read: date(2024, 1, 15),
                tags: vec!["Sci-Fi".to_string(), "Classic".to_string(), "Epic".to_string()],
                language: "EN".to_string(),
                status: ReadingStatus::Read,
                review: Some("https://www.goodreads.com/book/show/44767458-dune".to_string()),
            },
            Book {
                title: "The Three-Body Problem".to_string(),
                author: "Liu Cixin".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1415428227i/20518872.jpg".to_string(),
                rating: 4,
                date_read: date(2024, 2, 20),
                tags: vec!["Sci-Fi".to_string(), "Chinese".to_string(), "Physics".to_string()],
                language: "EN".to_string(),
                status: ReadingStatus::Read,
                review: Some(
                    "https://www.goodreads.com/book/show/20518872-the-three-body-problem"
                        .to_string(),
                ),
            },
            Book {
                title: "Le Petit Prince".to_string(),
                author: "Antoine de Saint-Exupéry".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1367545443i/157993.jpg".to_string(),
                rating: 5,
                date_read: date(2024, 3, 10),
                tags: vec![
                    "Classic".to_string(),
                    "Philosophy".to_string(),
                    "Children".to_string(),
                ],
                language: "FR".to_string(),
                status: ReadingStatus::Read,
                review: Some(
                    "https://www.goodreads.com/book/show/157993.le-petit-prince".to_string(),
                ),
            },
            Book {
                title: "Norwegian Wood".to_string(),
                author: "Haruki Murakami".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1327942880i/11297.jpg".to_string(),
                rating: 4,
                date_read: None,
                tags: vec![
                    "Contemporary".to_string(),
                    "Japanese".to_string(),
                    "Coming-of-age".to_string(),
                ],
                language: "EN".to_string(),
                status: ReadingStatus::WantToRead,
                review: None,
            },
            Book {
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1657781257i/61439040.jpg".to_string(),
                rating: 5,
                date_read: date(2023, 12, 1),
                tags: vec![
                    "Dystopian".to_string(),
                    "Classic".to_string(),
                    "Political".to_string(),
                ],
                language: "EN".to_string(),
                status: ReadingStatus::Read,
                review: Some("https://www.goodreads.com/book/show/61439040-1984".to_string()),
            },
            Book {
                title: "Don Quixote".to_string(),
                author: "Miguel de Cervantes".to_string(),
                cover: "https://images-na.ssl-images-amazon.com/images/S/compressed.photo.goodreads.com/books/1546071216i/3836.jpg".to_string(),
                rating: 4,
                date_read: date(2023, 11, 15),
                tags: vec![
                    "Classic".to_string(),
                    "Spanish".to_string(),
                    "Adventure".to_string(),
                ],
                language: "ES".to_string(),
                status: ReadingStatus::Read,
                review: Some("https://www.goodreads.com/book/show/3836.Don_Quixote".to_string()),
            },
        ];

        Self { books, skipped: 0 }
    }

    /// Distinct tags across the catalog, in first-seen order
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for book in &self.books {
            for tag in &book.tags {
                if !seen.contains(tag) {
                    seen.push(tag.clone());
                }
            }
        }
        seen
    }

    /// Distinct language codes across the catalog, in first-seen order
    pub fn distinct_languages(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for book in &self.books {
            if !seen.contains(&book.language) {
                seen.push(book.language.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfviewError;

    #[test]
    fn test_parse_valid_document() {
        let data = r#"{
            "books": [
                {"title": "Dune", "author": "Frank Herbert", "language": "EN",
                 "rating": 5, "dateRead": "2024-01-15", "status": "read"}
            ]
        }"#;

        let catalog = Catalog::parse(data).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped, 0);
        assert_eq!(catalog.books[0].title, "Dune");
    }

    #[test]
    fn test_parse_skips_malformed_records() {
        let data = r#"{
            "books": [
                {"title": "Good", "author": "A", "language": "EN"},
                {"title": "Bad record without author or language"},
                {"title": "Also Good", "author": "B", "language": "FR"}
            ]
        }"#;

        let catalog = Catalog::parse(data).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped, 1);
        assert_eq!(catalog.books[1].title, "Also Good");
    }

    #[test]
    fn test_parse_missing_books_key_yields_empty_catalog() {
        let catalog = Catalog::parse("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object_document() {
        assert!(Catalog::parse("[1, 2, 3]").is_err());
        assert!(Catalog::parse("not json at all").is_err());
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        let titles: Vec<_> = catalog.books.iter().map(|b| b.title.as_str()).collect();
        assert!(titles.contains(&"Dune"));
        assert!(titles.contains(&"1984"));
        assert!(titles.contains(&"Don Quixote"));
    }

    #[test]
    fn test_distinct_tags_first_seen_order() {
        let catalog = Catalog::sample();
        let tags = catalog.distinct_tags();
        assert_eq!(tags[0], "Sci-Fi");
        assert_eq!(tags.iter().filter(|t| *t == "Classic").count(), 1);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(
            &path,
            r#"{"books": [{"title": "T", "author": "A", "language": "EN"}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = Catalog::load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, ShelfviewError::Io(_)));
    }
}
