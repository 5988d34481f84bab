//! Degree plan harvester - Extract course requirements from the UT Dallas catalog.
//!
//! This crate reads an undergraduate catalog page and reconstructs its degree
//! plan: the mandates of the core curriculum and the major, and for every
//! course the prerequisites and corequisites listed in its description.
//!
//! # Example
//!
//! ```
//! use degreeplan_harvester::parse_degree_plan;
//!
//! let page = r#"
//!     <p class="cat-reqa">I. Core Curriculum Requirements</p>
//!     <p class="cat-reqi"><a title="MATH 2413 Prerequisite: MATH 2306. (3-0) S">MATH 2413</a></p>
//!     <p class="cat-reqi catreq-cont">or <a title="MATH 2417 (4-0) S">MATH 2417</a></p>
//!     <p class="cat-reqa">II. Major Requirements</p>
//! "#;
//!
//! let plan = parse_degree_plan(page).unwrap();
//! assert_eq!(plan.identifiers(), vec![vec!["MATH 2413", "MATH 2417"]]);
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Course, Requirement, DegreePlan, etc.)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for downloading catalog pages
//! - [`source`]: Remote or local catalog sources
//! - [`html`]: Typed document tree and traversal helpers
//! - [`text`]: Text normalization
//! - [`relations`]: Prerequisite and corequisite classification
//! - [`walker`]: Degree plan reconstruction from catalog paragraphs
//! - [`output`]: JSON output generation
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod harvester;
pub mod html;
pub mod http;
pub mod output;
pub mod relations;
pub mod source;
pub mod text;
pub mod types;
pub mod walker;

// Re-export main functions
pub use harvester::{harvest_degree_plan, parse_degree_plan};

// Re-export commonly used items
pub use config::validate_source;
pub use error::{HarvesterError, Result};
pub use output::to_json;
pub use relations::classify;
pub use types::{Course, DegreePlan, Mandate, RelationKind, Relations, Requirement};
