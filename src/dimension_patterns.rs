//! # Dimension Patterns Module
//!
//! This module contains the token grammar shared by every dimension matcher:
//! the shape of a number, the unit aliases (English, French and Dutch) and the
//! optional width/height marker.
//!
//! Unit aliases are matched case-sensitively.

use lazy_static::lazy_static;
use regex::Regex;

/// Mixed fraction (`1 1/2`), or an integer/decimal with `.` or `,` separator
///
/// Digits are ASCII only, the set `f64` parsing accepts.
pub const NUMBER_PATTERN: &str = r"((?:[0-9]+\s+[0-9]+/[0-9]+)|(?:[0-9]+(?:[.,][0-9]+)?))";

// Alternation order matters: the first alias that matches wins ("d" before "duymen").
pub const UNIT_PATTERN: &str =
    r#"('|"|d[.]?|duymen|pouces?|inches|inch|in[.]?|pieds?|v[.]?|voeten|feet|foot|ft[.]?|cm)"#;

/// Trailing width/height marker of a plain dimension side
pub const WIDTH_HEIGHT_PATTERN: &str = r"(?:\s*(\b[wh]|width|height))?";

/// A single `<number><optional unit>` token, whitespace-tolerant between the two
pub fn dimension_pattern() -> String {
    format!(r"({NUMBER_PATTERN}\s*(?:{UNIT_PATTERN})?)")
}

lazy_static! {
    /// Token scanner used by the measurement parser.
    ///
    /// Capture 2 is the numeric text, capture 3 the unit alias.
    pub static ref DIMENSION_TOKEN_REGEX: Regex = Regex::new(&format!(r"\s*{}", dimension_pattern()))
        .expect("Dimension token pattern should be valid");
}
