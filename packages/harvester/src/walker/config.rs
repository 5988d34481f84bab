//! Configuration for the catalog's requirement sections.

use std::sync::LazyLock;

use regex::Regex;

use super::registry::SectionRegistry;
use super::types::SectionSpec;

/// Heading of the core curriculum: "I. Core Curriculum Requirements".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CORE_CURRICULUM_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*I\.").expect("valid regex"));

/// Heading of the major: "II. Major Requirements".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MAJOR_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*II\.").expect("valid regex"));

/// Create the section registry for a degree plan page.
///
/// Sections are extracted in registration order:
///
/// ```text
/// I.  Core Curriculum Requirements   -> every item up to the next heading
/// II. Major Requirements             -> every item up to the next heading
///                                       or the first electives group
/// III. Elective Requirements         -> not extracted
/// ```
#[must_use]
pub fn create_catalog_sections() -> SectionRegistry {
    let mut registry = SectionRegistry::new();

    registry.register(SectionSpec::new(
        "Core Curriculum Requirements",
        CORE_CURRICULUM_HEADING.clone(),
    ));

    registry.register(
        SectionSpec::new("Major Requirements", MAJOR_HEADING.clone())
            .with_stops_at_electives(true),
    );

    registry
}
