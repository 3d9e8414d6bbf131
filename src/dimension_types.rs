//! # Dimension Types Module
//!
//! This module defines the core types produced and consumed by the dimension
//! pipeline: parsed measurements, their normalized form, and the records handed
//! to the catalog pipeline.

use crate::registry::InstanceRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical measurement units recognized by the token grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Inches (`"`, `in.`, `pouces`, `duymen`, `d.`)
    Inches,
    /// Feet (`'`, `ft.`, `pieds`, `voeten`, `v.`)
    Feet,
    /// Centimeters
    Cm,
}

impl Unit {
    /// Canonical name, also used as the registry key for the unit instance
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Feet => "feet",
            Unit::Cm => "cm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The physical axis a measurement describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
    #[default]
    Unspecified,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
            Axis::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// A single parsed `<number><unit>` token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Canonical decimal text (e.g. "1.5", "0.25")
    pub value: String,
    /// Canonical unit, `None` when the token carried no unit
    pub unit: Option<Unit>,
    /// Axis tag shared by every measurement of a group
    pub axis: Axis,
}

impl Measurement {
    pub fn new(value: impl Into<String>, unit: Option<Unit>, axis: Axis) -> Self {
        Self {
            value: value.into(),
            unit,
            axis,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Measurements describing one axis, in the order they appeared (e.g. `[10 feet, 3 inches]`)
pub type MeasurementGroup = Vec<Measurement>;

/// A measurement group merged into a single value of one unit system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDimension {
    /// Sum of the group in its unit system (e.g. "123.0")
    pub value: String,
    /// `Inches` or `Cm`, `None` for unit-less groups
    pub unit: Option<Unit>,
    pub axis: Axis,
}

/// A normalized dimension together with the reconstruction of its original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDimension {
    pub dimension: NormalizedDimension,
    /// Per-measurement strings joined with ", " (e.g. "10 feet, 3 inches")
    pub label: String,
}

/// A dimension fact emitted to the catalog pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRecord {
    pub axis: Axis,
    pub value: String,
    /// Registry instance for the unit; absent for unit-less or unregistered units
    pub unit: Option<InstanceRef>,
    pub label: String,
}
