//! # Catalog Dimensions Example
//!
//! Walks through the dimension and price formats found in auction catalogs:
//! plain English measurements, French and Dutch phrasing, and loosely keyed
//! price records.

use catalog_facts::{CatalogExtractor, ExtractorConfig, Registry};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📐 Catalog Dimension Extraction Example");
    println!("=======================================\n");

    let extractor = CatalogExtractor::new(ExtractorConfig::default(), Registry::with_defaults());

    let descriptions = [
        "14 cm x 10 cm",
        "1 ft. 2 in. h by 3 ft. w",
        "Haut 14 pouces, large 10 pouces",
        "Hoog. 1 v. 6 d., Breed 2 v. 3 d.",
        "Breedt 6 v., hoog 3 v",
        "2 in. 3 cm x 4 cm",
        "Panel, oil on canvas",
    ];

    for text in descriptions {
        let result = extractor.extract_physical_dimensions(text);
        println!("{text}");
        if result.is_empty() {
            println!("  (no dimensions)");
        }
        for record in &result {
            let unit = record.unit.as_ref().map_or("unitless", |u| u.name.as_str());
            println!(
                "  • {}: {} {} (\"{}\")",
                record.axis, record.value, unit, record.label
            );
        }
        for warning in result.diagnostics().warnings() {
            println!("  ⚠️  {warning}");
        }
    }

    println!("\n💰 Price Records");
    println!("----------------");

    let records = [
        vec![
            ("est_price", "x"),
            ("est_price_amount", "100[?]"),
            ("est_price_currency", "pounds"),
        ],
        vec![("start_price", "250"), ("start_price_curr", "fl.")],
        vec![("price", "x"), ("price_amount", "abc")],
    ];

    for pairs in records {
        let record: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let result = extractor.extract_monetary_amount(&record);
        println!("{}", serde_json::to_string(&result.amount)?);
    }

    Ok(())
}
