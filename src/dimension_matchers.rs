//! # Dimension Matchers Module
//!
//! Locale-specific recognizers for whole dimension strings. Each matcher is
//! anchored at the start of the input and yields one or two measurement
//! groups. They are tried in a fixed order and the first success wins:
//!
//! 1. Plain two-axis: `1 ft. 2 in. h by 3 cm w`, `14 cm x 10 cm`
//! 2. French two-axis: `Haut 14 pouces, large 10 pouces`
//! 3. Dutch two-axis: `Hoog. 1 v. 6 d., Breed 2 v. 3 d.`
//! 4. Plain single-axis: `1' 2"`, `12 cm h`

use crate::diagnostics::{Diagnostics, Warning};
use crate::dimension_parser::parse_simple_dimensions;
use crate::dimension_patterns::{dimension_pattern, WIDTH_HEIGHT_PATTERN};
use crate::dimension_types::MeasurementGroup;
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

/// A matcher returns the groups it recognized, or `None` to let the next one try
pub type DimensionMatcher = fn(&str, &mut Diagnostics) -> Option<Vec<MeasurementGroup>>;

/// The matcher cascade, in priority order
pub const MATCHERS: [(&str, DimensionMatcher); 4] = [
    ("plain two-axis", simple_dimensions_x2),
    ("french two-axis", french_dimensions_x2),
    ("dutch two-axis", dutch_dimensions_x2),
    ("plain single-axis", simple_dimensions_x1),
];

lazy_static! {
    static ref SIMPLE_X1_REGEX: Regex = Regex::new(&format!(
        r"^(?P<d1>(?:{dim}\s*)+)(?P<d1w>{wh})",
        dim = dimension_pattern(),
        wh = WIDTH_HEIGHT_PATTERN,
    ))
    .expect("Single-axis dimension pattern should be valid");

    static ref SIMPLE_X2_REGEX: Regex = Regex::new(&format!(
        r"^(?P<d1>(?:{dim}\s*)+)(?P<d1w>{wh})(?:,)?\s*(x|by)(?P<d2>(?:\s*{dim})+)(?P<d2w>{wh})",
        dim = dimension_pattern(),
        wh = WIDTH_HEIGHT_PATTERN,
    ))
    .expect("Two-axis dimension pattern should be valid");

    static ref FRENCH_X2_REGEX: Regex = Regex::new(&format!(
        r"^[Hh]aut(?:eur)? (?P<d1>(?:{dim}\s*)+), [Ll]arge(?:ur)? (?P<d2>(?:{dim}\s*)+)",
        dim = dimension_pattern(),
    ))
    .expect("French dimension pattern should be valid");

    static ref DUTCH_X2_REGEX: Regex = Regex::new(&format!(
        r"^(?P<d1w>[Hh]oogh?[.]?|[Bb]reedt?) (?P<d1>(?:{dim}\s*)+), (?P<d2w>[Hh]oogh?[.]?|[Bb]reedt?) (?P<d2>(?:{dim}\s*)+)",
        dim = dimension_pattern(),
    ))
    .expect("Dutch dimension pattern should be valid");
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Parse both sides of a two-axis match, reporting the input when either fails
fn parse_pair(
    input: &str,
    (d1, d1w): (&str, Option<&str>),
    (d2, d2w): (&str, Option<&str>),
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    let first = parse_simple_dimensions(d1, d1w, diagnostics);
    let second = parse_simple_dimensions(d2, d2w, diagnostics);
    match (first, second) {
        (Some(first), Some(second)) => Some(vec![first, second]),
        _ => {
            diagnostics.push(Warning::GroupParseFailed {
                input: input.to_string(),
                first: d1.to_string(),
                second: d2.to_string(),
            });
            None
        }
    }
}

/// Two dimensions separated by `x` or `by`, each with an optional width/height marker
pub fn simple_dimensions_x2(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    let caps = SIMPLE_X2_REGEX.captures(text)?;
    parse_pair(
        text,
        (group(&caps, "d1"), Some(group(&caps, "d1w"))),
        (group(&caps, "d2"), Some(group(&caps, "d2w"))),
        diagnostics,
    )
}

/// `Haut(eur) <height>, large(ur) <width>`
pub fn french_dimensions_x2(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    let caps = FRENCH_X2_REGEX.captures(text)?;
    parse_pair(
        text,
        (group(&caps, "d1"), Some("h")),
        (group(&caps, "d2"), Some("w")),
        diagnostics,
    )
}

/// `Hoog(h). <height>, Breed(t) <width>`, in either order
pub fn dutch_dimensions_x2(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    let caps = DUTCH_X2_REGEX.captures(text)?;
    let (mut first, mut second) = ("h", "w");
    if group(&caps, "d1w").to_lowercase().contains("breed") {
        std::mem::swap(&mut first, &mut second);
    }
    parse_pair(
        text,
        (group(&caps, "d1"), Some(first)),
        (group(&caps, "d2"), Some(second)),
        diagnostics,
    )
}

/// One dimension with an optional width/height marker
pub fn simple_dimensions_x1(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    let caps = SIMPLE_X1_REGEX.captures(text)?;
    parse_simple_dimensions(group(&caps, "d1"), Some(group(&caps, "d1w")), diagnostics)
        .map(|d1| vec![d1])
}

/// Run the matcher cascade over `text`
///
/// Returns the groups of the first matcher that succeeds, or `None` when no
/// matcher recognizes the string.
///
/// # Examples
///
/// ```rust
/// use catalog_facts::diagnostics::Diagnostics;
/// use catalog_facts::dimension_matchers::dimensions_cleaner;
/// use catalog_facts::dimension_types::Axis;
///
/// let mut diagnostics = Diagnostics::silent();
/// let groups = dimensions_cleaner("Haut 14 pouces, large 10 pouces", &mut diagnostics).unwrap();
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0][0].axis, Axis::Height);
/// assert_eq!(groups[1][0].axis, Axis::Width);
/// ```
pub fn dimensions_cleaner(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<MeasurementGroup>> {
    for (name, matcher) in MATCHERS {
        if let Some(groups) = matcher(text, diagnostics) {
            debug!("Matched '{}' with the {} matcher", text, name);
            return Some(groups);
        }
    }
    debug!("No dimension matcher recognized '{}'", text);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension_types::{Axis, Measurement, Unit};

    fn run(matcher: DimensionMatcher, text: &str) -> Option<Vec<MeasurementGroup>> {
        matcher(text, &mut Diagnostics::silent())
    }

    #[test]
    fn test_simple_x2_plain() {
        let groups = run(simple_dimensions_x2, "14 cm x 10 cm").unwrap();
        assert_eq!(
            groups,
            vec![
                vec![Measurement::new("14", Some(Unit::Cm), Axis::Unspecified)],
                vec![Measurement::new("10", Some(Unit::Cm), Axis::Unspecified)],
            ]
        );
    }

    #[test]
    fn test_simple_x2_with_markers_and_by() {
        let groups = run(simple_dimensions_x2, "1 ft. 2 in. h by 3 cm w").unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0],
            vec![
                Measurement::new("1", Some(Unit::Feet), Axis::Height),
                Measurement::new("2", Some(Unit::Inches), Axis::Height),
            ]
        );
        assert_eq!(
            groups[1],
            vec![Measurement::new("3", Some(Unit::Cm), Axis::Width)]
        );
    }

    #[test]
    fn test_simple_x2_comma_separator_and_words() {
        let groups = run(simple_dimensions_x2, "20 in. height, x 30 in. width").unwrap();
        assert_eq!(groups[0][0].axis, Axis::Height);
        assert_eq!(groups[1][0].axis, Axis::Width);
        assert_eq!(groups[1][0].value, "30");
    }

    #[test]
    fn test_simple_x2_requires_separator() {
        assert_eq!(run(simple_dimensions_x2, "14 cm"), None);
        assert_eq!(run(simple_dimensions_x2, "Haut 14 pouces, large 10 pouces"), None);
    }

    #[test]
    fn test_french_x2() {
        let groups = run(french_dimensions_x2, "Haut 14 pouces, large 10 pouces").unwrap();
        assert_eq!(
            groups,
            vec![
                vec![Measurement::new("14", Some(Unit::Inches), Axis::Height)],
                vec![Measurement::new("10", Some(Unit::Inches), Axis::Width)],
            ]
        );

        let groups = run(french_dimensions_x2, "hauteur 2 pieds 3 pouces, Largeur 1 pied").unwrap();
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1][0].unit, Some(Unit::Feet));
    }

    #[test]
    fn test_dutch_x2_height_first() {
        let groups = run(dutch_dimensions_x2, "Hoog. 1 v. 6 d., Breed 2 v. 3 d.").unwrap();
        assert_eq!(
            groups[0],
            vec![
                Measurement::new("1", Some(Unit::Feet), Axis::Height),
                Measurement::new("6", Some(Unit::Inches), Axis::Height),
            ]
        );
        assert_eq!(
            groups[1],
            vec![
                Measurement::new("2", Some(Unit::Feet), Axis::Width),
                Measurement::new("3", Some(Unit::Inches), Axis::Width),
            ]
        );
    }

    #[test]
    fn test_dutch_x2_breed_first_swaps_axes() {
        let groups = run(dutch_dimensions_x2, "Breedt 6 v., hoog 3 v").unwrap();
        assert_eq!(
            groups,
            vec![
                vec![Measurement::new("6", Some(Unit::Feet), Axis::Width)],
                vec![Measurement::new("3", Some(Unit::Feet), Axis::Height)],
            ]
        );
    }

    #[test]
    fn test_simple_x1() {
        let groups = run(simple_dimensions_x1, "1' 2\" h").unwrap();
        assert_eq!(
            groups,
            vec![vec![
                Measurement::new("1", Some(Unit::Feet), Axis::Height),
                Measurement::new("2", Some(Unit::Inches), Axis::Height),
            ]]
        );

        assert_eq!(run(simple_dimensions_x1, "about 3 feet"), None);
    }

    #[test]
    fn test_cascade_priority() {
        let mut diagnostics = Diagnostics::silent();

        // Both the two-axis and single-axis patterns could match; two-axis wins
        let groups = dimensions_cleaner("14 cm x 10 cm", &mut diagnostics).unwrap();
        assert_eq!(groups.len(), 2);

        let groups = dimensions_cleaner("14 cm", &mut diagnostics).unwrap();
        assert_eq!(groups.len(), 1);

        assert_eq!(dimensions_cleaner("unknown", &mut diagnostics), None);
        assert_eq!(dimensions_cleaner("", &mut diagnostics), None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_failed_side_falls_through() {
        let mut diagnostics = Diagnostics::silent();

        // The two-axis match is rejected; the single-axis matcher then rejects the same fraction
        assert_eq!(dimensions_cleaner("1 1/3 in x 2 in", &mut diagnostics), None);
        assert!(diagnostics
            .warnings()
            .iter()
            .any(|w| matches!(w, Warning::GroupParseFailed { .. })));
    }
}
