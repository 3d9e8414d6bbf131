//! # Dimension Parser
//!
//! Turns the text of one matched dimension side (e.g. `"1 ft. 2 in."`) into a
//! group of canonical measurements.
//!
//! ## Features
//!
//! - Decimal values with `.` or `,` separators
//! - Quarter fractions (`1 1/4`, `2 1/2`, `3 3/4`); any other fraction rejects the group
//! - Unit aliases in English, French and Dutch
//! - Width/height marker resolution

use crate::diagnostics::{Diagnostics, Warning};
use crate::dimension_patterns::DIMENSION_TOKEN_REGEX;
use crate::dimension_types::{Axis, Measurement, MeasurementGroup, Unit};
use log::trace;

/// Normalize the numeric text of a token
///
/// Returns `None` for fractions other than quarters.
///
/// # Examples
///
/// ```rust
/// use catalog_facts::dimension_parser::canonical_value;
///
/// assert_eq!(canonical_value("1 1/2"), Some("1.5".to_string()));
/// assert_eq!(canonical_value("2,5"), Some("2.5".to_string()));
/// assert_eq!(canonical_value("1 1/3"), None);
/// ```
pub fn canonical_value(text: &str) -> Option<String> {
    let mut value = text
        .replace(',', ".")
        .replace(" 1/4", ".25")
        .replace(" 1/2", ".5")
        .replace(" 3/4", ".75");
    if value.contains('/') {
        return None;
    }
    if value.starts_with('.') {
        value.insert(0, '0');
    }
    Some(value)
}

/// Resolve a unit alias to its canonical unit
pub fn canonical_unit(text: &str) -> Option<Unit> {
    let text = text.to_lowercase();
    match text.as_str() {
        "\"" | "d" | "d." | "duymen" | "pouce" | "pouces" => Some(Unit::Inches),
        "'" | "v" | "v." | "voeten" | "feet" | "foot" | "pied" | "pieds" => Some(Unit::Feet),
        t if t.contains("in") => Some(Unit::Inches),
        t if t.contains("ft") => Some(Unit::Feet),
        t if t.contains("cm") => Some(Unit::Cm),
        _ => None,
    }
}

/// Resolve a width/height marker
///
/// Anything starting with `w` is a width and anything starting with `h` a
/// height; other non-empty markers are reported and treated as absent.
pub fn canonical_axis(marker: Option<&str>, diagnostics: &mut Diagnostics) -> Axis {
    let marker = match marker.map(|m| m.trim().to_lowercase()) {
        Some(m) if !m.is_empty() => m,
        _ => return Axis::Unspecified,
    };
    if marker.starts_with('w') {
        Axis::Width
    } else if marker.starts_with('h') {
        Axis::Height
    } else {
        diagnostics.push(Warning::UnknownAxis(marker));
        Axis::Unspecified
    }
}

/// Parse every dimension token in `text` into a measurement group tagged with
/// the axis named by `marker`
///
/// Returns `None` when `text` holds no token, or when any token's value cannot
/// be canonicalized (the whole group is rejected).
///
/// # Arguments
///
/// * `text` - One matched dimension side (e.g. `"10 ft. 3 in."`)
/// * `marker` - Optional width/height marker (`"w"`, `"height"`, ...)
/// * `diagnostics` - Collector for recoverable anomalies
///
/// # Examples
///
/// ```rust
/// use catalog_facts::diagnostics::Diagnostics;
/// use catalog_facts::dimension_parser::parse_simple_dimensions;
/// use catalog_facts::dimension_types::{Axis, Unit};
///
/// let mut diagnostics = Diagnostics::silent();
/// let group = parse_simple_dimensions("1 ft. 2 in.", Some("h"), &mut diagnostics).unwrap();
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group[0].unit, Some(Unit::Feet));
/// assert_eq!(group[1].value, "2");
/// assert_eq!(group[1].axis, Axis::Height);
/// ```
pub fn parse_simple_dimensions(
    text: &str,
    marker: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Option<MeasurementGroup> {
    let text = text.trim();
    let mut tokens = Vec::new();

    for caps in DIMENSION_TOKEN_REGEX.captures_iter(text) {
        let raw_value = caps.get(2).map_or("", |m| m.as_str());
        let Some(value) = canonical_value(raw_value) else {
            diagnostics.push(Warning::UncanonicalValue(raw_value.to_string()));
            return None;
        };

        let unit_text = caps.get(3).map(|m| m.as_str());
        let unit = unit_text.and_then(canonical_unit);
        if let (Some(unit_text), None) = (unit_text, unit) {
            diagnostics.push(Warning::UnknownUnit(unit_text.to_string()));
        }

        trace!("Parsed dimension token '{}' -> {} {:?}", &caps[1], value, unit);
        tokens.push((value, unit));
    }

    if tokens.is_empty() {
        return None;
    }

    let axis = canonical_axis(marker, diagnostics);
    Some(
        tokens
            .into_iter()
            .map(|(value, unit)| Measurement::new(value, unit, axis))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<MeasurementGroup> {
        parse_simple_dimensions(text, None, &mut Diagnostics::silent())
    }

    #[test]
    fn test_canonical_value() {
        assert_eq!(canonical_value("14"), Some("14".to_string()));
        assert_eq!(canonical_value("2,5"), Some("2.5".to_string()));
        assert_eq!(canonical_value("1 1/4"), Some("1.25".to_string()));
        assert_eq!(canonical_value("1 3/4"), Some("1.75".to_string()));
        assert_eq!(canonical_value(",5"), Some("0.5".to_string()));
        assert_eq!(canonical_value("2 5/8"), None);
    }

    #[test]
    fn test_canonical_unit() {
        assert_eq!(canonical_unit("\""), Some(Unit::Inches));
        assert_eq!(canonical_unit("in."), Some(Unit::Inches));
        assert_eq!(canonical_unit("duymen"), Some(Unit::Inches));
        assert_eq!(canonical_unit("d."), Some(Unit::Inches));
        assert_eq!(canonical_unit("'"), Some(Unit::Feet));
        assert_eq!(canonical_unit("ft."), Some(Unit::Feet));
        assert_eq!(canonical_unit("v."), Some(Unit::Feet));
        assert_eq!(canonical_unit("pied"), Some(Unit::Feet));
        assert_eq!(canonical_unit("cm"), Some(Unit::Cm));
        assert_eq!(canonical_unit("yd"), None);
    }

    #[test]
    fn test_canonical_axis() {
        let mut diagnostics = Diagnostics::silent();

        assert_eq!(canonical_axis(Some("w"), &mut diagnostics), Axis::Width);
        assert_eq!(canonical_axis(Some(" height"), &mut diagnostics), Axis::Height);
        assert_eq!(canonical_axis(Some("H"), &mut diagnostics), Axis::Height);
        assert_eq!(canonical_axis(None, &mut diagnostics), Axis::Unspecified);
        assert_eq!(canonical_axis(Some(""), &mut diagnostics), Axis::Unspecified);
        assert!(diagnostics.is_empty());

        assert_eq!(canonical_axis(Some("depth"), &mut diagnostics), Axis::Unspecified);
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UnknownAxis("depth".to_string())]
        );
    }

    #[test]
    fn test_parse_fraction_inches() {
        let group = parse("1 1/2 in").unwrap();
        assert_eq!(group, vec![Measurement::new("1.5", Some(Unit::Inches), Axis::Unspecified)]);
    }

    #[test]
    fn test_parse_comma_decimal_cm() {
        let group = parse("2,5 cm").unwrap();
        assert_eq!(group, vec![Measurement::new("2.5", Some(Unit::Cm), Axis::Unspecified)]);
    }

    #[test]
    fn test_parse_single_tokens() {
        let cases = vec![
            ("14 cm", "14", Some(Unit::Cm)),
            ("3'", "3", Some(Unit::Feet)),
            ("7\"", "7", Some(Unit::Inches)),
            ("12 pouces", "12", Some(Unit::Inches)),
            ("5 pieds", "5", Some(Unit::Feet)),
            ("6 voeten", "6", Some(Unit::Feet)),
            ("2 duymen", "2", Some(Unit::Inches)),
            ("10 3/4 inches", "10.75", Some(Unit::Inches)),
            ("42", "42", None),
        ];

        for (text, value, unit) in cases {
            let group = parse(text).unwrap_or_else(|| panic!("Failed to parse: '{}'", text));
            assert_eq!(group.len(), 1, "Expected one token for: '{}'", text);
            assert_eq!(group[0].value, value, "Value mismatch for: '{}'", text);
            assert_eq!(group[0].unit, unit, "Unit mismatch for: '{}'", text);
        }
    }

    #[test]
    fn test_parse_mixed_tokens_share_axis() {
        let mut diagnostics = Diagnostics::silent();
        let group = parse_simple_dimensions("10 ft. 3 in.", Some("w"), &mut diagnostics).unwrap();

        assert_eq!(
            group,
            vec![
                Measurement::new("10", Some(Unit::Feet), Axis::Width),
                Measurement::new("3", Some(Unit::Inches), Axis::Width),
            ]
        );
    }

    #[test]
    fn test_unsupported_fraction_rejects_group() {
        let mut diagnostics = Diagnostics::silent();
        assert_eq!(
            parse_simple_dimensions("1 ft. 2 1/3 in.", None, &mut diagnostics),
            None
        );
        assert_eq!(
            diagnostics.warnings(),
            &[Warning::UncanonicalValue("2 1/3".to_string())]
        );
    }

    #[test]
    fn test_no_tokens() {
        let mut diagnostics = Diagnostics::silent();
        assert_eq!(parse_simple_dimensions("about", Some("xyz"), &mut diagnostics), None);
        assert_eq!(parse_simple_dimensions("   ", None, &mut diagnostics), None);
        // The marker is only resolved once a token exists
        assert!(diagnostics.is_empty());
    }
}
