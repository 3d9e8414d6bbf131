//! # Catalog Facts
//!
//! Extracts physical dimensions and monetary amounts from free-text auction
//! and collection catalog descriptions written in English, French or Dutch.
//!
//! Dimension strings go through a cascade of locale matchers, then each
//! recognized group is normalized into one value per axis with a label that
//! preserves the original wording. All anomalies are reported as warnings
//! next to the results; no input can make an extraction call fail.

pub mod config;
pub mod diagnostics;
pub mod dimension_matchers;
pub mod dimension_parser;
pub mod dimension_patterns;
pub mod dimension_types;
pub mod extraction;
pub mod monetary;
pub mod normalization;
pub mod registry;

pub use config::ExtractorConfig;
pub use diagnostics::{Diagnostics, Warning};
pub use dimension_types::{Axis, DimensionRecord, Measurement, NormalizedDimension, Unit};
pub use extraction::{CatalogExtractor, DimensionExtraction, MonetaryExtraction};
pub use monetary::{Annotation, MonetaryAmount, PriceKind};
pub use registry::{CurrencyAliases, InstanceRef, Registry};
