use anyhow::{bail, Result};
use catalog_facts::{CatalogExtractor, ExtractorConfig, Registry};
use log::{info, warn};
use serde_json::json;
use std::collections::HashMap;
use std::env;
use std::io::{self, BufRead, Write};

const USAGE: &str = "usage: catalog-facts [dimensions|prices] < input";

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let command = env::args().nth(1).unwrap_or_else(|| "dimensions".to_string());
    let config = ExtractorConfig::from_env()?;
    let extractor = CatalogExtractor::new(config, Registry::with_defaults());

    info!("Starting catalog-facts in '{}' mode", command);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processed = 0usize;

    match command.as_str() {
        "dimensions" => {
            for line in stdin.lock().lines() {
                let line = line?;
                let result = extractor.extract_physical_dimensions(&line);
                let doc = json!({
                    "input": line,
                    "dimensions": result.records(),
                    "warnings": result.diagnostics().messages(),
                });
                writeln!(out, "{doc}")?;
                processed += 1;
            }
        }
        "prices" => {
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let doc = match serde_json::from_str::<HashMap<String, String>>(&line) {
                    Ok(record) => {
                        let result = extractor.extract_monetary_amount(&record);
                        json!({
                            "amount": result.amount,
                            "warnings": result.diagnostics.messages(),
                        })
                    }
                    Err(err) => {
                        warn!("Skipping malformed record '{}': {}", line, err);
                        json!({ "amount": null, "error": err.to_string() })
                    }
                };
                writeln!(out, "{doc}")?;
                processed += 1;
            }
        }
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }

    info!("Processed {} inputs", processed);
    Ok(())
}
