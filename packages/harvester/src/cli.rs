//! Command-line interface for the harvester.

use std::io;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::harvester::parse_degree_plan;
use crate::output::write_json;
use crate::source::CatalogSource;

/// Degree plan harvester - Extract course requirements from the UT Dallas catalog.
///
/// The plan is written to stdout as JSON; progress and a summary go to stderr.
#[derive(Parser)]
#[command(name = "degreeplan-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog page URL, or the path of a saved copy of the page
    pub source: String,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    harvest_command(&cli.source)
}

/// Execute the harvest.
fn harvest_command(source: &str) -> Result<()> {
    // Validate the argument before making HTTP requests
    let catalog = CatalogSource::parse(source)?;

    eprintln!(
        "{} {}",
        style("Harvesting").bold(),
        style(catalog.describe()).cyan()
    );

    // Spinners draw to stderr
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Loading catalog page...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let plan = match catalog.load().and_then(|markup| {
        pb.set_message("Walking requirements...");
        parse_degree_plan(&markup)
    }) {
        Ok(plan) => plan,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    eprintln!("  Mandates: {}", style(plan.len()).green());
    eprintln!("  Courses: {}", style(plan.course_count()).green());

    write_json(&plan, io::stdout().lock())
}
