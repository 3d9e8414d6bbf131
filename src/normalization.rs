//! # Dimension Normalization
//!
//! Merges a measurement group expressed in several magnitudes of one unit
//! system (e.g. feet and inches) into a single value, and rebuilds a display
//! label that preserves the original measurements.

use crate::diagnostics::{Diagnostics, Warning};
use crate::dimension_types::{
    Axis, LabeledDimension, Measurement, NormalizedDimension, Unit,
};
use log::trace;

const INCHES_PER_FOOT: f64 = 12.0;

/// Render a sum the way catalog values are written: the shortest exact
/// representation, integral values keep one decimal place ("123.0"), and
/// magnitudes below 1e-4 or from 1e16 up use an exponent ("1e-05", "1e+16")
pub fn format_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        format!("{value}")
    } else if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.abs())
            }
            None => formatted,
        }
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Display label for a group: each measurement in its original unit, joined with ", "
pub fn dimension_label(group: &[Measurement]) -> String {
    group
        .iter()
        .map(Measurement::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Normalize a measurement group into a single dimension
///
/// Feet are folded into inches. Returns `None` (with a warning) when the group
/// spans more than one unit system, is empty, or holds a non-numeric value. A
/// group whose values are all zero normalizes to a unit-less zero.
///
/// # Examples
///
/// ```rust
/// use catalog_facts::diagnostics::Diagnostics;
/// use catalog_facts::dimension_types::{Axis, Measurement, Unit};
/// use catalog_facts::normalization::normalize_dimension;
///
/// let group = vec![
///     Measurement::new("10", Some(Unit::Feet), Axis::Unspecified),
///     Measurement::new("3", Some(Unit::Inches), Axis::Unspecified),
/// ];
/// let dimension = normalize_dimension(&group, &mut Diagnostics::silent()).unwrap();
///
/// assert_eq!(dimension.value, "123.0");
/// assert_eq!(dimension.unit, Some(Unit::Inches));
/// ```
pub fn normalize_dimension(
    group: &[Measurement],
    diagnostics: &mut Diagnostics,
) -> Option<NormalizedDimension> {
    let mut inches = 0.0;
    let mut cm = 0.0;
    let mut unknown = 0.0;
    let mut axis = Axis::Unspecified;

    for measurement in group {
        axis = measurement.axis;
        let value: f64 = match measurement.value.parse() {
            Ok(value) => value,
            Err(_) => {
                diagnostics.push(Warning::UncanonicalValue(measurement.value.clone()));
                return None;
            }
        };
        match measurement.unit {
            Some(Unit::Inches) => inches += value,
            Some(Unit::Feet) => inches += INCHES_PER_FOOT * value,
            Some(Unit::Cm) => cm += value,
            None => unknown += value,
        }
    }

    if group.is_empty() {
        diagnostics.push(Warning::MixedUnitSystems("no measurements".to_string()));
        return None;
    }

    let used_systems = [inches, cm, unknown]
        .iter()
        .filter(|sum| **sum != 0.0)
        .count();
    trace!(
        "Dimension sums: inches={} cm={} unknown={}",
        inches,
        cm,
        unknown
    );

    let (value, unit) = match used_systems {
        0 => (0.0, None),
        1 if inches != 0.0 => (inches, Some(Unit::Inches)),
        1 if cm != 0.0 => (cm, Some(Unit::Cm)),
        1 => (unknown, None),
        _ => {
            diagnostics.push(Warning::MixedUnitSystems(dimension_label(group)));
            return None;
        }
    };

    Some(NormalizedDimension {
        value: format_decimal(value),
        unit,
        axis,
    })
}

/// Normalize a group and pair it with the label of its original measurements
///
/// # Examples
///
/// ```rust
/// use catalog_facts::diagnostics::Diagnostics;
/// use catalog_facts::dimension_types::{Axis, Measurement, Unit};
/// use catalog_facts::normalization::normalized_dimension_object;
///
/// let group = vec![
///     Measurement::new("10", Some(Unit::Feet), Axis::Unspecified),
///     Measurement::new("3", Some(Unit::Inches), Axis::Unspecified),
/// ];
/// let labeled = normalized_dimension_object(&group, &mut Diagnostics::silent()).unwrap();
///
/// assert_eq!(labeled.label, "10 feet, 3 inches");
/// ```
pub fn normalized_dimension_object(
    group: &[Measurement],
    diagnostics: &mut Diagnostics,
) -> Option<LabeledDimension> {
    let dimension = normalize_dimension(group, diagnostics)?;
    Some(LabeledDimension {
        dimension,
        label: dimension_label(group),
    })
}
