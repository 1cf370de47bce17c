//! Filters command implementation

use anyhow::Result;
use serde::Serialize;
use shelfview_core::language_name;

/// Available filter values for a catalog
#[derive(Serialize)]
struct FilterValues {
    tags: Vec<String>,
    languages: Vec<LanguageValue>,
}

#[derive(Serialize)]
struct LanguageValue {
    code: String,
    name: String,
}

/// List the distinct tags and languages present in the catalog
pub async fn filters(catalog_path: &str, json: bool) -> Result<()> {
    let catalog = super::load_or_sample(catalog_path).await;

    let values = FilterValues {
        tags: catalog.distinct_tags(),
        languages: catalog
            .distinct_languages()
            .into_iter()
            .map(|code| LanguageValue {
                name: language_name(&code).to_string(),
                code,
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    println!("Tags:");
    for tag in &values.tags {
        println!("  {}", tag);
    }
    println!("Languages:");
    for language in &values.languages {
        println!("  {} ({})", language.name, language.code);
    }

    Ok(())
}
