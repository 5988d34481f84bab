//! Core data types for the harvester.
//!
//! A degree plan is a list of mandates. A mandate lists interchangeable
//! options; completing it means completing one option. A requirement is a list
//! of mandates that must all be completed.
//!
//! Each course carries three requirements taken from its catalog description:
//!
//! - prerequisites: taken in an earlier term;
//! - weak corequisites: taken earlier or in the same term;
//! - strict corequisites: taken in the same term. Strict corequisites form an
//!   equivalence class, so a scheduler may treat them as one compound course.
//!
//! A prerequisite of a prerequisite is not recorded as a prerequisite.

use serde::Serialize;

use crate::config::is_course_number;

/// One alternative within a mandate: a course number or free text.
pub type CourseOption = String;

/// Interchangeable options, at least one of which must be completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mandate(Vec<CourseOption>);

impl Mandate {
    /// Create a mandate from its options.
    #[must_use]
    pub fn new(options: Vec<CourseOption>) -> Self {
        Self(options)
    }

    #[must_use]
    pub fn options(&self) -> &[CourseOption] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered mandates, all of which must be completed.
///
/// An empty requirement means "no requirement of this kind".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Requirement(Vec<Mandate>);

impl Requirement {
    /// Create an empty requirement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mandate. Mandates without options are ignored.
    pub fn push(&mut self, mandate: Mandate) {
        if !mandate.is_empty() {
            self.0.push(mandate);
        }
    }

    #[must_use]
    pub fn mandates(&self) -> &[Mandate] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Options of every mandate, for comparisons in tests and logs.
    #[must_use]
    pub fn to_options(&self) -> Vec<Vec<String>> {
        self.0.iter().map(|m| m.0.clone()).collect()
    }
}

impl FromIterator<Mandate> for Requirement {
    fn from_iter<I: IntoIterator<Item = Mandate>>(iter: I) -> Self {
        let mut requirement = Self::new();
        for mandate in iter {
            requirement.push(mandate);
        }
        requirement
    }
}

/// The three relations a course description can state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Taken in an earlier term.
    Prerequisite,
    /// Taken in an earlier term or the same term.
    WeakCorequisite,
    /// Taken in the same term.
    StrictCorequisite,
}

impl RelationKind {
    /// All kinds in extraction order.
    pub const ALL: [Self; 3] = [
        Self::Prerequisite,
        Self::WeakCorequisite,
        Self::StrictCorequisite,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prerequisite => "prerequisite",
            Self::WeakCorequisite => "weak corequisite",
            Self::StrictCorequisite => "strict corequisite",
        }
    }
}

/// Requirements extracted from one course description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub prerequisites: Requirement,
    pub weak_corequisites: Requirement,
    pub strict_corequisites: Requirement,
}

impl Relations {
    /// Requirement slot for a relation kind.
    pub fn get_mut(&mut self, kind: RelationKind) -> &mut Requirement {
        match kind {
            RelationKind::Prerequisite => &mut self.prerequisites,
            RelationKind::WeakCorequisite => &mut self.weak_corequisites,
            RelationKind::StrictCorequisite => &mut self.strict_corequisites,
        }
    }

    #[must_use]
    pub fn get(&self, kind: RelationKind) -> &Requirement {
        match kind {
            RelationKind::Prerequisite => &self.prerequisites,
            RelationKind::WeakCorequisite => &self.weak_corequisites,
            RelationKind::StrictCorequisite => &self.strict_corequisites,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        RelationKind::ALL.iter().all(|&kind| self.get(kind).is_empty())
    }
}

/// One requirement-bearing entry of the degree plan.
///
/// Fields are declared in the order of their serialized names, which keeps
/// the JSON output key-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Course number ("CS 1200"), or a free-text label for non-course entries.
    #[serde(rename = "num")]
    pub identifier: String,

    #[serde(rename = "prereqs")]
    pub prerequisites: Requirement,

    #[serde(rename = "scoreqs")]
    pub strict_corequisites: Requirement,

    /// Set by downstream schedulers; always `0` here.
    #[serde(rename = "sem")]
    pub semester: u32,

    /// Set by downstream schedulers; always `false` here.
    pub taken: bool,

    #[serde(rename = "wcoreqs")]
    pub weak_corequisites: Requirement,
}

impl Course {
    /// Create a course with no requirements.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            prerequisites: Requirement::new(),
            strict_corequisites: Requirement::new(),
            semester: 0,
            taken: false,
            weak_corequisites: Requirement::new(),
        }
    }

    /// Attach extracted relations.
    #[must_use]
    pub fn with_relations(mut self, relations: Relations) -> Self {
        self.prerequisites = relations.prerequisites;
        self.weak_corequisites = relations.weak_corequisites;
        self.strict_corequisites = relations.strict_corequisites;
        self
    }

    /// Whether the identifier is a catalog course number.
    ///
    /// # Examples
    /// ```
    /// use degreeplan_harvester::types::Course;
    ///
    /// assert!(Course::new("CS 1200").is_real_course());
    /// assert!(!Course::new("Upper-division guided elective").is_real_course());
    /// ```
    #[must_use]
    pub fn is_real_course(&self) -> bool {
        is_course_number(&self.identifier)
    }
}

/// The extracted degree plan: mandates whose options are courses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DegreePlan(Vec<Vec<Course>>);

impl DegreePlan {
    /// Create a plan from its mandates.
    #[must_use]
    pub fn new(mandates: Vec<Vec<Course>>) -> Self {
        Self(mandates)
    }

    #[must_use]
    pub fn mandates(&self) -> &[Vec<Course>] {
        &self.0
    }

    /// Number of mandates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of courses across all mandates.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Course numbers of every mandate, in order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<Vec<&str>> {
        self.0
            .iter()
            .map(|m| m.iter().map(|c| c.identifier.as_str()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandate(options: &[&str]) -> Mandate {
        Mandate::new(options.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_requirement_ignores_empty_mandates() {
        let mut requirement = Requirement::new();
        requirement.push(Mandate::default());
        assert!(requirement.is_empty());

        requirement.push(mandate(&["CS 1200"]));
        assert_eq!(requirement.len(), 1);
    }

    #[test]
    fn test_requirement_from_iter() {
        let requirement: Requirement = vec![mandate(&["CS 1200"]), Mandate::default()]
            .into_iter()
            .collect();
        assert_eq!(requirement.to_options(), vec![vec!["CS 1200".to_string()]]);
    }

    #[test]
    fn test_course_defaults() {
        let course = Course::new("CS 1337");
        assert!(!course.taken);
        assert_eq!(course.semester, 0);
        assert!(course.prerequisites.is_empty());
        assert!(course.weak_corequisites.is_empty());
        assert!(course.strict_corequisites.is_empty());
    }

    #[test]
    fn test_is_real_course() {
        assert!(Course::new("MATH 2413").is_real_course());
        assert!(!Course::new("Any approved course").is_real_course());
        assert!(!Course::new("cs 1200").is_real_course());
    }

    #[test]
    fn test_relations_slots() {
        let mut relations = Relations::default();
        assert!(relations.is_empty());

        relations
            .get_mut(RelationKind::WeakCorequisite)
            .push(mandate(&["CS 2305"]));
        assert!(!relations.is_empty());
        assert!(relations.get(RelationKind::Prerequisite).is_empty());
        assert_eq!(relations.weak_corequisites.len(), 1);

        let course = Course::new("CS 2336").with_relations(relations);
        assert_eq!(
            course.weak_corequisites.to_options(),
            vec![vec!["CS 2305".to_string()]]
        );
    }

    #[test]
    fn test_degree_plan_counts() {
        let plan = DegreePlan::new(vec![
            vec![Course::new("RHET 1302")],
            vec![Course::new("MATH 2413"), Course::new("MATH 2417")],
        ]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.course_count(), 3);
        assert_eq!(
            plan.identifiers(),
            vec![vec!["RHET 1302"], vec!["MATH 2413", "MATH 2417"]]
        );
    }

    #[test]
    fn test_course_serialized_names() {
        let value = serde_json::to_value(Course::new("CS 1200")).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["num", "prereqs", "scoreqs", "sem", "taken", "wcoreqs"]);
    }
}
