//! Main harvester service that ties all components together.

use crate::error::Result;
use crate::html::Document;
use crate::source::load_source;
use crate::types::DegreePlan;
use crate::walker::WalkEngine;

/// Load a catalog page and extract its degree plan.
///
/// # Arguments
/// * `source` - An http(s) URL of the catalog page, or the path of a saved copy
///
/// # Returns
/// The `DegreePlan` with one entry per mandate of the core curriculum and the
/// major requirements
pub fn harvest_degree_plan(source: &str) -> Result<DegreePlan> {
    let markup = load_source(source)?;
    parse_degree_plan(&markup)
}

/// Extract the degree plan from already loaded catalog markup.
pub fn parse_degree_plan(markup: &str) -> Result<DegreePlan> {
    let doc = Document::parse(markup);
    tracing::debug!(nodes = doc.len(), "Parsed catalog page");

    let plan = WalkEngine::default().walk(&doc)?;
    tracing::debug!(
        mandates = plan.len(),
        courses = plan.course_count(),
        "Extracted degree plan"
    );

    Ok(plan)
}
