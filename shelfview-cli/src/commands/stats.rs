//! Stats command implementation

use anyhow::Result;
use shelfview_core::compute_stats;

/// Display aggregate counters over the full catalog
pub async fn stats(catalog_path: &str, json: bool) -> Result<()> {
    let catalog = super::load_or_sample(catalog_path).await;
    let stats = compute_stats(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total:        {}", stats.total);
        println!("Read:         {}", stats.read);
        println!("Want to read: {}", stats.want_to_read);
    }

    Ok(())
}
