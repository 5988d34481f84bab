//! Walk engine that reconstructs the degree plan from catalog paragraphs.

use std::sync::LazyLock;

use regex::Regex;

use super::builder::PlanBuilder;
use super::config::create_catalog_sections;
use super::registry::SectionRegistry;
use super::types::{ItemKind, ScanOutcome, SectionSpec};
use crate::config::{
    CONTINUATION_CLASS, ELECTIVES_PATTERN, GROUP_CLASS, HEADING_CLASS, ITEM_CLASS, PARAGRAPH_TAG,
    TITLE_ATTRIBUTE,
};
use crate::error::{HarvesterError, Result};
use crate::html::{
    describe, find_elements, first_meaningful_child, first_meaningful_child_where, get_attribute,
    get_text, has_class, next_element_sibling, Document, NodeId,
};
use crate::relations::classify;
use crate::types::{Course, DegreePlan};

/// Leading "or" of a continuation whose option is plain text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_OR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^or\s+").expect("valid regex"));

/// Engine for extracting a degree plan from a catalog page.
///
/// For each registered section the engine finds the section heading and scans
/// its following sibling paragraphs, feeding a [`PlanBuilder`].
pub struct WalkEngine {
    sections: SectionRegistry,
}

impl WalkEngine {
    /// Create a new walk engine.
    #[must_use]
    pub fn new(sections: SectionRegistry) -> Self {
        Self { sections }
    }

    /// Walk a document and build its degree plan.
    ///
    /// # Errors
    /// Returns a malformed-input error when a section heading, a course link,
    /// a `class` attribute or a course `title` is missing. No partial plan is
    /// returned.
    pub fn walk(&self, doc: &Document) -> Result<DegreePlan> {
        let headings: Vec<NodeId> = find_elements(doc, PARAGRAPH_TAG, HEADING_CLASS).collect();
        tracing::debug!(count = headings.len(), "Found requirement headings");

        let mut builder = PlanBuilder::new();

        for section in self.sections.sections() {
            let heading = headings
                .iter()
                .copied()
                .find(|&id| section.matches_heading(&get_text(doc, id)))
                .ok_or_else(|| HarvesterError::MissingElement {
                    element: format!("'{}' heading", section.name),
                    context: "catalog page".to_string(),
                })?;

            tracing::debug!(section = %section.name, "Scanning section");
            let before = builder.mandate_count();
            let outcome = self.scan_section(doc, heading, section, &mut builder)?;
            tracing::debug!(
                section = %section.name,
                mandates = builder.mandate_count() - before,
                ?outcome,
                "Finished section"
            );

            if outcome == ScanOutcome::Electives {
                break;
            }
        }

        Ok(builder.finish())
    }

    /// Scan the siblings following a section heading.
    fn scan_section(
        &self,
        doc: &Document,
        heading: NodeId,
        section: &SectionSpec,
        builder: &mut PlanBuilder,
    ) -> Result<ScanOutcome> {
        let mut current = next_element_sibling(doc, heading);

        while let Some(id) = current {
            match self.classify_item(doc, id, section)? {
                ItemKind::Heading => return Ok(ScanOutcome::NextHeading),
                ItemKind::Electives => return Ok(ScanOutcome::Electives),
                ItemKind::Continuation => {
                    let option = continuation_option(doc, id)?;
                    builder.append_option(build_continuation_course(doc, option)?)?;
                }
                ItemKind::Item => {
                    let option = item_option(doc, id)?;
                    builder.start_mandate(build_course(doc, option)?);
                }
                ItemKind::Other => {
                    tracing::trace!(element = %describe(doc, id), "Skipping non-requirement element");
                }
            }
            current = next_element_sibling(doc, id);
        }

        Ok(ScanOutcome::EndOfSiblings)
    }

    /// Decide what a sibling element is.
    ///
    /// Continuation paragraphs carry both the item and continuation classes,
    /// so the continuation check comes first.
    fn classify_item(&self, doc: &Document, id: NodeId, section: &SectionSpec) -> Result<ItemKind> {
        if get_attribute(doc, id, "class").is_none() {
            return Err(HarvesterError::MissingAttribute {
                attribute: "class".to_string(),
                element: format!("{} in {}", describe(doc, id), section.name),
            });
        }

        let kind = if has_class(doc, id, HEADING_CLASS) {
            ItemKind::Heading
        } else if section.stops_at_electives
            && has_class(doc, id, GROUP_CLASS)
            && ELECTIVES_PATTERN.is_match(&get_text(doc, id))
        {
            ItemKind::Electives
        } else if has_class(doc, id, CONTINUATION_CLASS) {
            ItemKind::Continuation
        } else if has_class(doc, id, ITEM_CLASS) {
            ItemKind::Item
        } else {
            ItemKind::Other
        };

        Ok(kind)
    }
}

impl Default for WalkEngine {
    fn default() -> Self {
        Self::new(create_catalog_sections())
    }
}

/// Whether a node is the bare "or" that opens a continuation paragraph.
fn is_or_marker(doc: &Document, id: NodeId) -> bool {
    doc.node(id)
        .as_text()
        .is_some_and(|text| text.trim().eq_ignore_ascii_case("or"))
}

/// The option node of a requirement item.
fn item_option(doc: &Document, item: NodeId) -> Result<NodeId> {
    first_meaningful_child(doc, item).ok_or_else(|| HarvesterError::MissingElement {
        element: "course link".to_string(),
        context: describe(doc, item),
    })
}

/// The option node of a continuation item, after its "or" marker.
fn continuation_option(doc: &Document, item: NodeId) -> Result<NodeId> {
    first_meaningful_child_where(doc, item, |child| !is_or_marker(doc, child)).ok_or_else(|| {
        HarvesterError::MissingElement {
            element: "course link after 'or'".to_string(),
            context: describe(doc, item),
        }
    })
}

/// Build a course from its option node.
///
/// Relations are only extracted for catalog course numbers; free-text
/// options carry no description to parse.
///
/// # Errors
/// `HarvesterError::MissingAttribute` if a course number has no `title`.
pub fn build_course(doc: &Document, option: NodeId) -> Result<Course> {
    course_with_identifier(doc, option, get_text(doc, option))
}

/// Build the course of a continuation item.
///
/// A plain-text option shares its text node with the "or" marker
/// (`or Any approved mathematics course`), so the marker is stripped first.
fn build_continuation_course(doc: &Document, option: NodeId) -> Result<Course> {
    let text = get_text(doc, option);
    let identifier = if doc.node(option).is_text() {
        LEADING_OR.replace(&text, "").into_owned()
    } else {
        text
    };
    course_with_identifier(doc, option, identifier)
}

fn course_with_identifier(doc: &Document, option: NodeId, identifier: String) -> Result<Course> {
    let course = Course::new(identifier);

    if !course.is_real_course() {
        tracing::debug!(option = %course.identifier, "Free-text option, no relations extracted");
        return Ok(course);
    }

    let title = get_attribute(doc, option, TITLE_ATTRIBUTE).ok_or_else(|| {
        HarvesterError::MissingAttribute {
            attribute: TITLE_ATTRIBUTE.to_string(),
            element: format!("course link '{}'", course.identifier),
        }
    })?;

    Ok(course.with_relations(classify(title)))
}
