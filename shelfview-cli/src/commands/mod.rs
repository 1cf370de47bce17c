//! CLI command implementations

mod filters;
mod list;
mod stats;

pub use filters::filters;
pub use list::list;
pub use stats::stats;

use shelfview_core::Catalog;

/// Load the catalog, substituting the built-in sample collection when the
/// source cannot be read so the listing is never empty because of a load
/// failure.
pub(crate) async fn load_or_sample(path: &str) -> Catalog {
    let catalog = match Catalog::load(path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Failed to load catalog from {}, using sample data: {}", path, e);
            Catalog::sample()
        }
    };

    if catalog.skipped > 0 {
        tracing::warn!("Skipped {} malformed record(s) in {}", catalog.skipped, path);
    }
    catalog
}
