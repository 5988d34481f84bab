//! Relation classifier for course descriptions.
//!
//! This module provides:
//! - A declarative rule table describing where each relation starts and ends
//! - One extraction routine driven by that table
//!
//! Adding a terminator or relation means editing the table in [`rules`], not
//! the extraction code.

mod classifier;
pub mod rules;

pub use classifier::{build_requirement, classify};
pub use rules::{CompiledRule, RelationRule, COMPILED_RULES, RELATION_RULES};
