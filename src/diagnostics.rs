//! # Diagnostics Module
//!
//! Recoverable anomalies found while extracting catalog facts. None of these
//! abort a call: they are collected next to the results so a caller processing
//! thousands of records can report them without being halted by one bad entry.

use log::warn;
use serde::Serialize;

/// A non-fatal extraction warning
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Warning {
    /// A numeric token could not be canonicalized (unsupported fraction, stray text)
    UncanonicalValue(String),
    /// Unit text the grammar captured but no canonical unit matches
    UnknownUnit(String),
    /// Width/height marker that is neither `w...` nor `h...`
    UnknownAxis(String),
    /// A group mixing imperial, metric and/or unit-less values, or with nothing to sum
    MixedUnitSystems(String),
    /// A two-axis pattern matched but one of its sides did not parse
    GroupParseFailed {
        input: String,
        first: String,
        second: String,
    },
    /// No registry instance for the (alias-resolved) currency name
    UnresolvedCurrency(String),
    /// Price amount kept as a display name because it is not a number
    NonNumericAmount(String),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UncanonicalValue(text) => {
                write!(f, "failed to canonicalize dimension value: {text}")
            }
            Warning::UnknownUnit(text) => write!(f, "not a recognized unit: {text}"),
            Warning::UnknownAxis(text) => write!(f, "unknown which dimension: {text}"),
            Warning::MixedUnitSystems(text) => write!(
                f,
                "dimension used a mix of unit systems (metric, imperial, and/or unknown): {text}"
            ),
            Warning::GroupParseFailed {
                input,
                first,
                second,
            } => write!(
                f,
                "failed to parse dimensions: {input} (first side '{first}', second side '{second}')"
            ),
            Warning::UnresolvedCurrency(text) => {
                write!(f, "no currency instance defined for {text}")
            }
            Warning::NonNumericAmount(text) => write!(f, "not a numeric price amount: {text}"),
        }
    }
}

impl std::error::Error for Warning {}

/// Ordered collector of the warnings raised by one extraction call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
    /// Mirror every warning to the `log` stream as it is recorded
    log_warnings: bool,
}

impl Diagnostics {
    /// A collector that also logs each warning at `warn` level
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
            log_warnings: true,
        }
    }

    /// A collector that only records
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn with_logging(log_warnings: bool) -> Self {
        Self {
            warnings: Vec::new(),
            log_warnings,
        }
    }

    pub fn push(&mut self, warning: Warning) {
        if self.log_warnings {
            warn!("{}", warning);
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Rendered warning messages, in the order they were raised
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
