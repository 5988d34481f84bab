//! Rule table for locating relation segments in a course description.
//!
//! Catalog descriptions end with clauses such as:
//!
//! ```text
//! ... Prerequisite: CS 1200. Prerequisite or Corequisite: CS 1337.
//! Corequisite: CS 2305. (Same as SE 2336) (3-0) S
//! ```
//!
//! Each relation starts at an anchor label and runs until the first
//! terminator in its list that matches, or to the end of the text when none
//! does. Segments use a greedy capture, so a terminator that occurs more than
//! once binds to its last occurrence.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::RelationKind;

/// "Prerequisite:" or "Prerequisites:".
const PREREQUISITE_LABEL: &str = r"Prerequisites?:";

/// "Prerequisite or Corequisite:" and its plural forms.
const PREREQUISITE_OR_COREQUISITE_LABEL: &str = r"Prerequisites? or Corequisites?:";

/// Bare corequisite label, as found inside the weak label too.
const COREQUISITE_LABEL: &str = r"Corequisites?:";

/// Corequisite label that starts its own sentence.
const COREQUISITE_SENTENCE: &str = r"\. Corequisites?:";

/// Cross-listing clause, e.g. "(Same as SE 2336)".
const SAME_AS_CLAUSE: &str = r"\(Same as.*\)";

/// Lecture/lab hour clause, e.g. "(3-0)".
const HOURS_CLAUSE: &str = r"\([0-9]-[0-9]\)";

/// Declarative description of how one relation is located.
#[derive(Debug, Clone, Copy)]
pub struct RelationRule {
    /// Which requirement the segment fills.
    pub kind: RelationKind,

    /// Regex for the label that opens the segment.
    pub anchor: &'static str,

    /// Regexes that may close the segment, in priority order.
    pub terminators: &'static [&'static str],
}

/// Rules for all three relations.
pub const RELATION_RULES: [RelationRule; 3] = [
    RelationRule {
        kind: RelationKind::Prerequisite,
        anchor: PREREQUISITE_LABEL,
        terminators: &[
            PREREQUISITE_OR_COREQUISITE_LABEL,
            COREQUISITE_LABEL,
            SAME_AS_CLAUSE,
            HOURS_CLAUSE,
        ],
    },
    RelationRule {
        kind: RelationKind::WeakCorequisite,
        anchor: PREREQUISITE_OR_COREQUISITE_LABEL,
        terminators: &[COREQUISITE_SENTENCE, SAME_AS_CLAUSE, HOURS_CLAUSE],
    },
    RelationRule {
        kind: RelationKind::StrictCorequisite,
        anchor: COREQUISITE_SENTENCE,
        terminators: &[SAME_AS_CLAUSE, HOURS_CLAUSE],
    },
];

/// A rule compiled into its ordered fallback chain of patterns.
#[derive(Debug)]
pub struct CompiledRule {
    kind: RelationKind,
    chain: Vec<Regex>,
}

impl CompiledRule {
    /// Compile a rule.
    ///
    /// The chain holds one `{anchor}(.*){terminator}` pattern per terminator,
    /// followed by `{anchor}(.*)$` for segments that run to the end.
    pub fn compile(rule: &RelationRule) -> Result<Self, regex::Error> {
        let mut chain = rule
            .terminators
            .iter()
            .map(|terminator| Regex::new(&format!("{}(.*){}", rule.anchor, terminator)))
            .collect::<Result<Vec<_>, _>>()?;
        chain.push(Regex::new(&format!("{}(.*)$", rule.anchor))?);

        Ok(Self {
            kind: rule.kind,
            chain,
        })
    }

    #[must_use]
    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Find this rule's segment in normalized description text.
    ///
    /// # Returns
    /// The raw text between the anchor and the first matching terminator, or
    /// `None` when the anchor does not occur.
    pub fn segment<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.chain.iter().find_map(|pattern| {
            let segment = pattern.captures(text)?.get(1)?.as_str();
            tracing::trace!(kind = self.kind.as_str(), pattern = %pattern, segment, "Matched relation segment");
            Some(segment)
        })
    }
}

/// Compiled rules, in the order of [`RELATION_RULES`].
#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
pub static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    RELATION_RULES
        .iter()
        .map(|rule| CompiledRule::compile(rule).expect("valid relation pattern"))
        .collect()
});
