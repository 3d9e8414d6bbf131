//! # Catalog Extraction
//!
//! Top-level entry points: turn a free-text dimension string into dimension
//! records, and a flat catalog record into a monetary amount. Every call
//! returns its results together with the diagnostics it raised.

use crate::config::ExtractorConfig;
use crate::diagnostics::Diagnostics;
use crate::dimension_matchers::dimensions_cleaner;
use crate::dimension_types::DimensionRecord;
use crate::monetary::{extract_monetary_amount, MonetaryAmount};
use crate::normalization::normalized_dimension_object;
use crate::registry::{CurrencyAliases, Registry};
use log::{debug, info};
use std::collections::HashMap;

/// Extract dimension records from `text`
///
/// Runs the matcher cascade, normalizes every recognized group and resolves
/// its unit through `registry`. Groups that fail normalization are skipped;
/// the reason is already in `diagnostics`.
pub fn extract_physical_dimensions(
    text: &str,
    registry: &Registry,
    diagnostics: &mut Diagnostics,
) -> Vec<DimensionRecord> {
    let Some(groups) = dimensions_cleaner(text, diagnostics) else {
        return Vec::new();
    };

    groups
        .iter()
        .filter_map(|group| normalized_dimension_object(group, diagnostics))
        .map(|labeled| {
            let dimension = labeled.dimension;
            DimensionRecord {
                axis: dimension.axis,
                unit: dimension
                    .unit
                    .and_then(|unit| registry.get(unit.name()))
                    .cloned(),
                value: dimension.value,
                label: labeled.label,
            }
        })
        .collect()
}

/// Dimension records extracted from one string, with the warnings raised
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionExtraction {
    records: Vec<DimensionRecord>,
    diagnostics: Diagnostics,
}

impl DimensionExtraction {
    pub fn records(&self) -> &[DimensionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DimensionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<DimensionRecord>, Diagnostics) {
        (self.records, self.diagnostics)
    }
}

impl<'a> IntoIterator for &'a DimensionExtraction {
    type Item = &'a DimensionRecord;
    type IntoIter = std::slice::Iter<'a, DimensionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The monetary amount of one record (if any), with the warnings raised
#[derive(Debug, Clone, PartialEq)]
pub struct MonetaryExtraction {
    pub amount: Option<MonetaryAmount>,
    pub diagnostics: Diagnostics,
}

/// Extractor bundling the configuration and the read-only lookups
///
/// Holds no per-call state: the same instance can serve any number of calls,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct CatalogExtractor {
    config: ExtractorConfig,
    registry: Registry,
    currency_aliases: CurrencyAliases,
}

impl CatalogExtractor {
    /// Create an extractor resolving units and currencies against `registry`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catalog_facts::config::ExtractorConfig;
    /// use catalog_facts::dimension_types::Axis;
    /// use catalog_facts::extraction::CatalogExtractor;
    /// use catalog_facts::registry::Registry;
    ///
    /// let extractor = CatalogExtractor::new(ExtractorConfig::default(), Registry::with_defaults());
    /// let result = extractor.extract_physical_dimensions("Hoog. 1 v. 6 d., Breed 2 v. 3 d.");
    ///
    /// assert_eq!(result.len(), 2);
    /// assert_eq!(result.records()[0].axis, Axis::Height);
    /// assert_eq!(result.records()[0].value, "18.0");
    /// assert_eq!(result.records()[1].value, "27.0");
    /// ```
    pub fn new(config: ExtractorConfig, registry: Registry) -> Self {
        info!(
            "Creating CatalogExtractor: log_diagnostics={}, registry_entries={}, extra_currency_aliases={}",
            config.log_diagnostics,
            registry.len(),
            config.extra_currency_aliases.len()
        );
        let currency_aliases = CurrencyAliases::with_extra(&config.extra_currency_aliases);
        Self {
            config,
            registry,
            currency_aliases,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn diagnostics(&self) -> Diagnostics {
        Diagnostics::with_logging(self.config.log_diagnostics)
    }

    /// Extract every dimension described by `text`
    pub fn extract_physical_dimensions(&self, text: &str) -> DimensionExtraction {
        let mut diagnostics = self.diagnostics();
        let records = extract_physical_dimensions(text, &self.registry, &mut diagnostics);
        debug!(
            "Extracted {} dimensions ({} warnings) from '{}'",
            records.len(),
            diagnostics.len(),
            text
        );
        DimensionExtraction {
            records,
            diagnostics,
        }
    }

    /// Extract the monetary amount of a flat catalog record
    pub fn extract_monetary_amount(&self, record: &HashMap<String, String>) -> MonetaryExtraction {
        let mut diagnostics = self.diagnostics();
        let amount = extract_monetary_amount(
            record,
            &self.registry,
            &self.currency_aliases,
            &mut diagnostics,
        );
        MonetaryExtraction {
            amount,
            diagnostics,
        }
    }
}

impl Default for CatalogExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default(), Registry::with_defaults())
    }
}
