//! # Monetary Amount Extraction
//!
//! Reads a price, starting price or estimated price out of a loosely keyed
//! catalog record.
//!
//! The variant is chosen by key presence (`est_price`, then `start_price`,
//! then plain price) and each field is read from a primary key with a more
//! verbose fallback:
//!
//! | field    | primary             | fallback          |
//! |----------|---------------------|-------------------|
//! | amount   | `<prefix>_amount`   | `<prefix>`        |
//! | currency | `<prefix>_currency` | `<prefix>_curr`   |
//! | note     | `<prefix>_note`     | `<prefix>_desc`   |
//! | citation | `<prefix>_citation` |                   |

use crate::diagnostics::{Diagnostics, Warning};
use crate::normalization::format_decimal;
use crate::registry::{CurrencyAliases, InstanceRef, Registry};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which kind of monetary amount a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceKind {
    Price,
    StartingPrice,
    EstimatedPrice,
}

impl PriceKind {
    /// Select the variant from the keys present in `record`
    pub fn for_record(record: &HashMap<String, String>) -> Self {
        if record.contains_key("est_price") {
            PriceKind::EstimatedPrice
        } else if record.contains_key("start_price") {
            PriceKind::StartingPrice
        } else {
            PriceKind::Price
        }
    }

    fn keys(&self) -> &'static PriceKeys {
        match self {
            PriceKind::Price => &PRICE_KEYS,
            PriceKind::StartingPrice => &START_PRICE_KEYS,
            PriceKind::EstimatedPrice => &EST_PRICE_KEYS,
        }
    }
}

struct PriceKeys {
    amount: [&'static str; 2],
    currency: [&'static str; 2],
    note: [&'static str; 2],
    citation: &'static str,
}

static EST_PRICE_KEYS: PriceKeys = PriceKeys {
    amount: ["est_price_amount", "est_price"],
    currency: ["est_price_currency", "est_price_curr"],
    note: ["est_price_note", "est_price_desc"],
    citation: "est_price_citation",
};

static START_PRICE_KEYS: PriceKeys = PriceKeys {
    amount: ["start_price_amount", "start_price"],
    currency: ["start_price_currency", "start_price_curr"],
    note: ["start_price_note", "start_price_desc"],
    citation: "start_price_citation",
};

static PRICE_KEYS: PriceKeys = PriceKeys {
    amount: ["price_amount", "price"],
    currency: ["price_currency", "price_curr"],
    note: ["price_note", "price_desc"],
    citation: "price_citation",
};

/// Text attached to an amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Annotation {
    BibliographyStatement(String),
    Note(String),
}

/// A price fact extracted from a catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    pub kind: PriceKind,
    /// Numeric amount, when the amount text parsed as a number
    pub value: Option<f64>,
    pub currency: Option<InstanceRef>,
    /// The amount text as written, kept when it is not numeric
    pub name: Option<String>,
    /// Combined display label (e.g. "100.0 gb pounds")
    pub label: Option<String>,
    pub annotations: Vec<Annotation>,
}

/// Primary key, then the fallback; a present but empty value counts as absent
fn lookup<'a>(record: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| record.get(*key))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Strip uncertainty markers (`[?]`, `?`) and surrounding whitespace
pub fn clean_amount(text: &str) -> String {
    text.replace("[?]", "").replace('?', "").trim().to_string()
}

/// Extract the monetary amount described by `record`
///
/// Returns `None` when the record carries neither an amount nor a currency.
/// Non-numeric amounts and unknown currencies are reported as warnings and
/// degrade the result rather than failing it.
///
/// # Examples
///
/// ```rust
/// use catalog_facts::diagnostics::Diagnostics;
/// use catalog_facts::monetary::{extract_monetary_amount, PriceKind};
/// use catalog_facts::registry::{CurrencyAliases, Registry};
/// use std::collections::HashMap;
///
/// let record: HashMap<String, String> = [
///     ("est_price", "x"),
///     ("est_price_amount", "100[?]"),
///     ("est_price_currency", "pounds"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.to_string(), v.to_string()))
/// .collect();
///
/// let amount = extract_monetary_amount(
///     &record,
///     &Registry::with_defaults(),
///     &CurrencyAliases::default(),
///     &mut Diagnostics::silent(),
/// )
/// .unwrap();
///
/// assert_eq!(amount.kind, PriceKind::EstimatedPrice);
/// assert_eq!(amount.value, Some(100.0));
/// assert_eq!(amount.currency.unwrap().name, "gb pounds");
/// ```
pub fn extract_monetary_amount(
    record: &HashMap<String, String>,
    registry: &Registry,
    aliases: &CurrencyAliases,
    diagnostics: &mut Diagnostics,
) -> Option<MonetaryAmount> {
    let kind = PriceKind::for_record(record);
    let keys = kind.keys();

    let amount_text = lookup(record, &keys.amount);
    let currency_text = lookup(record, &keys.currency);
    if amount_text.is_none() && currency_text.is_none() {
        debug!("No {:?} amount or currency in record", kind);
        return None;
    }

    let mut amount = MonetaryAmount {
        kind,
        value: None,
        currency: None,
        name: None,
        label: None,
        annotations: Vec::new(),
    };

    if let Some(citation) = lookup(record, &[keys.citation]) {
        amount
            .annotations
            .push(Annotation::BibliographyStatement(citation.to_string()));
    }
    if let Some(note) = lookup(record, &keys.note) {
        amount.annotations.push(Annotation::Note(note.to_string()));
    }

    // Markers are stripped for parsing only; a non-numeric amount keeps its text as written
    let amount_label = amount_text.map(|text| match clean_amount(text).parse::<f64>() {
        Ok(value) => {
            amount.value = Some(value);
            format_decimal(value)
        }
        Err(_) => {
            diagnostics.push(Warning::NonNumericAmount(text.to_string()));
            amount.name = Some(text.to_string());
            text.to_string()
        }
    });

    let currency_name = currency_text.map(|text| {
        let canonical = aliases.resolve(text);
        match registry.get(canonical) {
            Some(instance) => amount.currency = Some(instance.clone()),
            None => diagnostics.push(Warning::UnresolvedCurrency(canonical.to_string())),
        }
        canonical.to_string()
    });

    amount.label = match (amount_label, currency_name) {
        (Some(value), Some(currency)) => Some(format!("{value} {currency}")),
        (Some(value), None) => Some(value),
        (None, currency) => currency,
    };

    Some(amount)
}
