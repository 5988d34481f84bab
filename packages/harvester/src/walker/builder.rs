//! Incremental construction of a degree plan.

use crate::error::{HarvesterError, Result};
use crate::types::{Course, DegreePlan};

/// Accumulates mandates while the walker scans the catalog.
///
/// The plan only grows through [`start_mandate`](Self::start_mandate) and
/// [`append_option`](Self::append_option), so every mandate holds at least
/// one course.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    mandates: Vec<Vec<Course>>,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new mandate whose first option is `course`.
    pub fn start_mandate(&mut self, course: Course) {
        tracing::debug!(course = %course.identifier, "Starting mandate");
        self.mandates.push(vec![course]);
    }

    /// Add `course` as another option of the most recent mandate.
    ///
    /// # Errors
    /// `HarvesterError::OrphanContinuation` if no mandate has been opened.
    pub fn append_option(&mut self, course: Course) -> Result<()> {
        let Some(mandate) = self.mandates.last_mut() else {
            return Err(HarvesterError::OrphanContinuation {
                course: course.identifier,
            });
        };
        tracing::debug!(course = %course.identifier, options = mandate.len() + 1, "Appending option");
        mandate.push(course);
        Ok(())
    }

    /// Number of mandates opened so far.
    #[must_use]
    pub fn mandate_count(&self) -> usize {
        self.mandates.len()
    }

    /// Finish building.
    #[must_use]
    pub fn finish(self) -> DegreePlan {
        DegreePlan::new(self.mandates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_mandate() {
        let mut builder = PlanBuilder::new();
        builder.start_mandate(Course::new("RHET 1302"));
        builder.start_mandate(Course::new("MATH 2413"));
        assert_eq!(builder.mandate_count(), 2);

        let plan = builder.finish();
        assert_eq!(plan.identifiers(), vec![vec!["RHET 1302"], vec!["MATH 2413"]]);
    }

    #[test]
    fn test_append_option_extends_last_mandate() {
        let mut builder = PlanBuilder::new();
        builder.start_mandate(Course::new("RHET 1302"));
        builder.start_mandate(Course::new("MATH 2413"));
        builder.append_option(Course::new("MATH 2417")).unwrap();

        let plan = builder.finish();
        assert_eq!(
            plan.identifiers(),
            vec![vec!["RHET 1302"], vec!["MATH 2413", "MATH 2417"]]
        );
    }

    #[test]
    fn test_append_option_without_mandate() {
        let mut builder = PlanBuilder::new();
        let err = builder.append_option(Course::new("MATH 2417")).unwrap_err();
        assert!(matches!(
            err,
            HarvesterError::OrphanContinuation { course } if course == "MATH 2417"
        ));
        assert!(builder.finish().is_empty());
    }
}
