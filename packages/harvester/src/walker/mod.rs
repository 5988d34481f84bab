//! Catalog walker for degree plan pages.
//!
//! This module rebuilds the requirement → mandate → option structure from the
//! flat run of `<p>` elements that follows each requirement heading.

mod builder;
mod config;
mod engine;
mod registry;
mod types;

pub use builder::PlanBuilder;
pub use config::create_catalog_sections;
pub use engine::{build_course, WalkEngine};
pub use registry::SectionRegistry;
pub use types::{ItemKind, ScanOutcome, SectionSpec};
