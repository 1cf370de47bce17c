//! The Book type - one immutable catalog entry

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single book record as it appears in the catalog document.
///
/// Optional fields are nullable on the wire and default when absent, so an
/// incomplete record still deserializes; only `title`, `author` and
/// `language` are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Cover image URI (display concern only, may be unreachable)
    #[serde(default)]
    pub cover: String,

    /// Star rating, 0 to 5
    #[serde(default)]
    pub rating: u8,

    /// Date the book was finished; meaningful only for `Read` status,
    /// but may be absent even then
    #[serde(default, rename = "dateRead")]
    pub date_read: Option<NaiveDate>,

    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,

    /// Short language code (e.g. "EN", "FR")
    pub language: String,

    /// Reading status
    #[serde(default)]
    pub status: ReadingStatus,

    /// URI to an external review, if one exists
    #[serde(default)]
    pub review: Option<String>,
}

impl Book {
    /// Create a minimal book with the given title, author and language
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover: String::new(),
            rating: 0,
            date_read: None,
            tags: Vec::new(),
            language: language.into(),
            status: ReadingStatus::default(),
            review: None,
        }
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Mark the book as read on the given date
    pub fn with_date_read(mut self, date: NaiveDate) -> Self {
        self.date_read = Some(date);
        self.status = ReadingStatus::Read;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the reading status
    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = status;
        self
    }
}

/// Whether a book has been read or is still on the wishlist
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    /// Finished reading
    Read,

    /// On the to-read list. The default for records that never state a
    /// status, so incomplete data stays out of the default `read` view.
    #[default]
    WantToRead,
}
