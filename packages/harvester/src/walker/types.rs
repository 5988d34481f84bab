//! Types for the catalog walker.

use regex::Regex;

/// Declarative specification of a requirement section.
///
/// A section starts at a heading paragraph whose text matches
/// `heading_pattern` and runs over the heading's following siblings.
#[derive(Debug, Clone)]
pub struct SectionSpec {
    /// Section name used in logs and error messages.
    pub name: String,

    /// Pattern the heading text must match.
    pub heading_pattern: Regex,

    /// Whether an electives group label ends the whole walk.
    ///
    /// Electives are not part of the extracted plan.
    pub stops_at_electives: bool,
}

impl SectionSpec {
    /// Create a new section specification.
    #[must_use]
    pub fn new(name: impl Into<String>, heading_pattern: Regex) -> Self {
        Self {
            name: name.into(),
            heading_pattern,
            stops_at_electives: false,
        }
    }

    /// Set whether electives end the walk.
    #[must_use]
    pub fn with_stops_at_electives(mut self, stops: bool) -> Self {
        self.stops_at_electives = stops;
        self
    }

    /// Check whether a heading's text opens this section.
    #[must_use]
    pub fn matches_heading(&self, heading_text: &str) -> bool {
        self.heading_pattern.is_match(heading_text)
    }
}

/// What a sibling paragraph means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// The next requirement heading.
    Heading,
    /// An electives group label in a section that stops at electives.
    Electives,
    /// An "or" alternative of the previous item.
    Continuation,
    /// A requirement item opening a new mandate.
    Item,
    /// Anything else (group labels, notes).
    Other,
}

/// Why scanning a section ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Reached another heading.
    NextHeading,
    /// Reached an electives group; nothing further is extracted.
    Electives,
    /// Ran out of siblings.
    EndOfSiblings,
}
