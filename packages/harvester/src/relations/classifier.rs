//! Splitting course descriptions into prerequisite and corequisite requirements.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::COMPILED_RULES;
use crate::text::normalize_text;
use crate::types::{Mandate, Relations, Requirement};

/// Conjunction separating mandates.
const AND: &str = " and ";

/// Conjunction separating options within a mandate.
const OR: &str = " or ";

/// Link text left in a description that embeds raw `<a>` markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINK_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">(.*)<").expect("valid regex"));

/// Extract all three relations from a course description.
///
/// A relation whose label does not occur yields an empty requirement; this
/// function never fails.
///
/// # Examples
/// ```
/// use degreeplan_harvester::relations::classify;
///
/// let relations = classify(
///     "Prerequisite: CS 1200. Prerequisite or Corequisite: CS 1337. Corequisite: CS 2305.",
/// );
/// assert_eq!(relations.prerequisites.to_options(), vec![vec!["CS 1200".to_string()]]);
/// assert_eq!(relations.weak_corequisites.to_options(), vec![vec!["CS 1337".to_string()]]);
/// assert_eq!(relations.strict_corequisites.to_options(), vec![vec!["CS 2305".to_string()]]);
/// ```
pub fn classify(description: &str) -> Relations {
    let text = normalize_text(description);
    let mut relations = Relations::default();

    for rule in COMPILED_RULES.iter() {
        if let Some(segment) = rule.segment(&text) {
            *relations.get_mut(rule.kind()) = build_requirement(segment);
        }
    }

    relations
}

/// Build a requirement from one relation segment.
///
/// The segment is split on " and " into mandates and each mandate on " or "
/// into options. A trailing sentence period is dropped first.
///
/// # Examples
/// ```
/// use degreeplan_harvester::relations::build_requirement;
///
/// let requirement = build_requirement(" CS 1200 or CS 1336 and MATH 2413. ");
/// assert_eq!(
///     requirement.to_options(),
///     vec![
///         vec!["CS 1200".to_string(), "CS 1336".to_string()],
///         vec!["MATH 2413".to_string()],
///     ]
/// );
/// ```
pub fn build_requirement(segment: &str) -> Requirement {
    let segment = segment.trim().trim_end_matches('.').trim_end();

    segment
        .split(AND)
        .map(|fragment| {
            Mandate::new(
                fragment
                    .split(OR)
                    .filter_map(option_identifier)
                    .collect(),
            )
        })
        .collect()
}

/// Identifier for one option token.
///
/// Tokens that still carry link markup yield the link text. Blank tokens
/// yield `None`.
fn option_identifier(token: &str) -> Option<String> {
    let identifier = LINK_TEXT
        .captures(token)
        .and_then(|captures| captures.get(1))
        .map_or(token, |m| m.as_str())
        .trim();

    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options(requirement: &Requirement) -> Vec<Vec<String>> {
        requirement.to_options()
    }

    fn strings(mandates: &[&[&str]]) -> Vec<Vec<String>> {
        mandates
            .iter()
            .map(|m| m.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_no_labels_gives_empty_relations() {
        let relations =
            classify("CS 1200 Introduction to Computer Science and Software Engineering (2-0) S");
        assert!(relations.is_empty());
    }

    #[test]
    fn test_empty_description() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_prerequisite_and() {
        let relations = classify("Prerequisite: CS 1200 and CS 2305.");
        assert_eq!(
            options(&relations.prerequisites),
            strings(&[&["CS 1200"], &["CS 2305"]])
        );
        assert!(relations.weak_corequisites.is_empty());
        assert!(relations.strict_corequisites.is_empty());
    }

    #[test]
    fn test_prerequisite_or() {
        let relations = classify("Prerequisite: CS 1200 or CS 1336.");
        assert_eq!(
            options(&relations.prerequisites),
            strings(&[&["CS 1200", "CS 1336"]])
        );
    }

    #[test]
    fn test_prerequisite_without_terminator_keeps_remaining_text() {
        let relations = classify("Prerequisite: MATH 2413 or equivalent or department consent");
        assert_eq!(
            options(&relations.prerequisites),
            strings(&[&["MATH 2413", "equivalent", "department consent"]])
        );
    }

    #[test]
    fn test_all_three_relations() {
        let relations = classify(
            "CS 2336 Computer Science II (3 semester credit hours) Further programming. \
             Prerequisite: CS 1337. Prerequisite or Corequisite: CS 2305 or MATH 2418. \
             Corequisite: CS 2136. (3-0) S",
        );
        assert_eq!(options(&relations.prerequisites), strings(&[&["CS 1337"]]));
        assert_eq!(
            options(&relations.weak_corequisites),
            strings(&[&["CS 2305", "MATH 2418"]])
        );
        assert_eq!(
            options(&relations.strict_corequisites),
            strings(&[&["CS 2136"]])
        );
    }

    #[test]
    fn test_plural_labels() {
        let relations = classify(
            "Prerequisites: CS 2336 and CS 2305 and MATH 2418. (Same as SE 3345) (3-0) S",
        );
        assert_eq!(
            options(&relations.prerequisites),
            strings(&[&["CS 2336"], &["CS 2305"], &["MATH 2418"]])
        );
    }

    #[test]
    fn test_weak_corequisite_only() {
        let relations = classify("Prerequisite or Corequisite: MATH 2413 or MATH 2417. (3-0) S");
        assert!(relations.prerequisites.is_empty());
        assert_eq!(
            options(&relations.weak_corequisites),
            strings(&[&["MATH 2413", "MATH 2417"]])
        );
        assert!(relations.strict_corequisites.is_empty());
    }

    #[test]
    fn test_prerequisite_and_strict_corequisite() {
        let relations =
            classify("Prerequisite: PHYS 2325. Corequisite: PHYS 2126 and MATH 2415. (3-0) S");
        assert_eq!(options(&relations.prerequisites), strings(&[&["PHYS 2325"]]));
        assert!(relations.weak_corequisites.is_empty());
        assert_eq!(
            options(&relations.strict_corequisites),
            strings(&[&["PHYS 2126"], &["MATH 2415"]])
        );
    }

    #[test]
    fn test_link_markup_in_description() {
        let relations = classify(
            r#"Prerequisites: <a href="/courses/cs1337">CS 1337</a> or <a href="/courses/cs1337">CE 1337</a>. (3-0) S"#,
        );
        assert_eq!(
            options(&relations.prerequisites),
            strings(&[&["CS 1337", "CE 1337"]])
        );
    }

    #[test]
    fn test_whitespace_normalized_before_matching() {
        let relations = classify("Prerequisite:\n   CS\u{a0}1337.\n(3-0)");
        assert_eq!(options(&relations.prerequisites), strings(&[&["CS 1337"]]));
    }

    #[test]
    fn test_build_requirement_drops_blank_options() {
        let requirement = build_requirement(" CS 1200 or  or CS 1336 and  and CS 2305");
        assert_eq!(
            options(&requirement),
            strings(&[&["CS 1200", "CS 1336"], &["CS 2305"]])
        );
    }

    #[test]
    fn test_build_requirement_blank_segment() {
        assert!(build_requirement("  . ").is_empty());
    }

    #[test]
    fn test_option_identifier() {
        assert_eq!(option_identifier(" CS 1200 "), Some("CS 1200".to_string()));
        assert_eq!(
            option_identifier(r#"<a href="x">MATH 2413</a>"#),
            Some("MATH 2413".to_string())
        );
        assert_eq!(option_identifier("   "), None);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Prerequisite: CS 1200. Prerequisite or Corequisite: CS 1337. Corequisite: CS 2305.";
        assert_eq!(classify(text), classify(text));
    }
}
