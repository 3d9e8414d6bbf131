//! # Extractor Configuration Module
//!
//! Settings for the catalog extractors, with defaults and environment overrides.

use anyhow::{bail, Result};
use std::env;

/// Toggles mirroring of diagnostics to the log stream ("true"/"false", "1"/"0")
pub const LOG_DIAGNOSTICS_VAR: &str = "CATALOG_FACTS_LOG_DIAGNOSTICS";
/// Extra currency aliases, as `alias=canonical;alias=canonical`
pub const CURRENCY_ALIASES_VAR: &str = "CATALOG_FACTS_CURRENCY_ALIASES";

/// Configuration options for the catalog extractors
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Whether every warning is also emitted at `warn` level as it is recorded
    pub log_diagnostics: bool,
    /// `(alias, canonical)` currency pairs added to the built-in alias table
    pub extra_currency_aliases: Vec<(String, String)>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            log_diagnostics: true,
            extra_currency_aliases: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the configuration variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(LOG_DIAGNOSTICS_VAR) {
            config.log_diagnostics = parse_flag(LOG_DIAGNOSTICS_VAR, &value)?;
        }
        if let Some(value) = lookup(CURRENCY_ALIASES_VAR) {
            config.extra_currency_aliases = parse_alias_list(&value)?;
        }
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be a boolean, got '{other}'"),
    }
}

/// Parse `alias=canonical;alias=canonical` (empty entries are skipped)
pub fn parse_alias_list(value: &str) -> Result<Vec<(String, String)>> {
    let mut aliases = Vec::new();
    for entry in value.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.split_once('=') {
            Some((alias, canonical)) if !alias.trim().is_empty() && !canonical.trim().is_empty() => {
                aliases.push((alias.trim().to_string(), canonical.trim().to_string()));
            }
            _ => bail!("invalid currency alias entry '{entry}', expected alias=canonical"),
        }
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert!(config.log_diagnostics);
    }

    #[test]
    fn test_overrides() {
        let config = ExtractorConfig::from_lookup(lookup_from(&[
            (LOG_DIAGNOSTICS_VAR, "false"),
            (CURRENCY_ALIASES_VAR, "gulden=nl guilders; ducats = it ducats;"),
        ]))
        .unwrap();

        assert!(!config.log_diagnostics);
        assert_eq!(
            config.extra_currency_aliases,
            vec![
                ("gulden".to_string(), "nl guilders".to_string()),
                ("ducats".to_string(), "it ducats".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(ExtractorConfig::from_lookup(lookup_from(&[(LOG_DIAGNOSTICS_VAR, "maybe")])).is_err());
        assert!(parse_alias_list("gulden").is_err());
        assert!(parse_alias_list("=nl guilders").is_err());
        assert!(parse_alias_list("").unwrap().is_empty());
    }
}
