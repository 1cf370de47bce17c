//! List command implementation

use anyhow::Result;
use chrono::NaiveDate;
use shelfview_core::{compute_view, language_name, Book, FilterConfig, ReadingStatus};

/// List the books matching the given filter configuration
pub async fn list(catalog_path: &str, config: &FilterConfig, json: bool) -> Result<()> {
    let catalog = super::load_or_sample(catalog_path).await;
    let view = compute_view(&catalog, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No books match the current filters.");
        return Ok(());
    }

    println!("Showing {} of {} books", view.len(), catalog.len());
    for book in view {
        println!();
        print_card(book);
    }

    Ok(())
}

/// Render one book as a terminal card
fn print_card(book: &Book) {
    let badge = match book.status {
        ReadingStatus::Read => "Read",
        ReadingStatus::WantToRead => "Want to Read",
    };

    println!("[{}] {}", badge, book.title);
    println!("  by {}", book.author);
    println!("  {} {}/5", stars(book.rating), book.rating);
    println!(
        "  {} | {}",
        book.date_read.map_or_else(|| "Not read yet".to_string(), format_date),
        language_name(&book.language)
    );
    if !book.tags.is_empty() {
        println!("  Tags: {}", book.tags.join(", "));
    }
    if let Some(review) = &book.review {
        println!("  Review: {}", review);
    }
}

/// Five-symbol star rating; ratings above 5 are clamped
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Format a read date the way the card shows it, e.g. "Mar 10, 2024"
fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_renders_five_symbols() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(format_date(date), "Mar 10, 2024");
    }
}
