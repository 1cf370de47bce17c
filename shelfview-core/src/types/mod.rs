//! Core types for the Shelfview catalog model

mod book;
mod config;

pub use book::{Book, ReadingStatus};
pub use config::{FilterConfig, SortBy, StatusFilter};
