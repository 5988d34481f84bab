//! Configuration constants and validation functions for the harvester.
//!
//! The class names below are the UT Dallas catalog's markup conventions. Both
//! requirement headings and requirement items are `<p>` elements that sit as
//! siblings under the same parent:
//!
//! ```text
//! <p class="cat-reqa">I. Core Curriculum Requirements: 42 semester credit hours</p>
//! <p class="cat-reqi"><a title="...">RHET 1302</a> Rhetoric</p>
//! <p class="cat-reqi catreq-cont">or <a title="...">ECS 3390</a></p>
//! <p class="cat-reqa">II. Major Requirements: 69 semester credit hours</p>
//! <p class="cat-reqg">Major Preparatory Courses</p>
//! ...
//! <p class="cat-reqg">Free Electives: 9 semester credit hours</p>
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP response size in bytes (20 MB).
///
/// Catalog pages are a few hundred kilobytes; anything near this limit is not
/// a degree plan page.
pub const MAX_RESPONSE_SIZE: u64 = 20 * 1024 * 1024;

/// Tag name of requirement headings and items.
pub const PARAGRAPH_TAG: &str = "p";

/// Class of requirement headings ("I. Core Curriculum Requirements").
pub const HEADING_CLASS: &str = "cat-reqa";

/// Class of requirement items holding a course link.
pub const ITEM_CLASS: &str = "cat-reqi";

/// Class marking an item as an "or" alternative of the previous item.
pub const CONTINUATION_CLASS: &str = "catreq-cont";

/// Class of group labels inside a section ("Free Electives").
pub const GROUP_CLASS: &str = "cat-reqg";

/// Attribute holding a course's catalog description.
pub const TITLE_ATTRIBUTE: &str = "title";

/// Indentation used for JSON output.
pub const JSON_INDENT: &[u8] = b"    ";

/// Course number pattern: 2-4 uppercase prefix letters and a 4 digit number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COURSE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4} [0-9]{4}").expect("valid regex"));

/// Group label pattern that ends the major requirements.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static ELECTIVES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[eE]lectives").expect("valid regex"));

/// Check whether an identifier has the shape of a catalog course number.
///
/// Only the start of the identifier is checked, so "CS 1200 Introduction"
/// still counts as a course.
///
/// # Examples
/// ```
/// use degreeplan_harvester::config::is_course_number;
///
/// assert!(is_course_number("CS 1200"));
/// assert!(is_course_number("MATH 2413"));
/// assert!(!is_course_number("Approved Core Curriculum course"));
/// ```
pub fn is_course_number(identifier: &str) -> bool {
    COURSE_NUMBER_PATTERN.is_match(identifier)
}

/// Check whether a source argument names a remote catalog page.
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validate a catalog source argument.
///
/// # Arguments
/// * `source` - URL or file path given on the command line
///
/// # Returns
/// * `Ok(())` if the source is a well-formed http(s) URL or a non-empty path
/// * `Err(HarvesterError::InvalidSource)` otherwise
///
/// # Examples
/// ```
/// use degreeplan_harvester::config::validate_source;
///
/// assert!(validate_source("https://catalog.utdallas.edu/2015/undergraduate/programs/ecs/computer-science").is_ok());
/// assert!(validate_source("fixtures/computer-science.html").is_ok());
/// assert!(validate_source("   ").is_err());
/// ```
pub fn validate_source(source: &str) -> Result<()> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(HarvesterError::InvalidSource(source.to_string()));
    }

    if is_remote_source(trimmed) {
        let url = reqwest::Url::parse(trimmed)
            .map_err(|_| HarvesterError::InvalidSource(source.to_string()))?;
        if url.host_str().is_none() {
            return Err(HarvesterError::InvalidSource(source.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_course_number_valid() {
        assert!(is_course_number("CS 1200"));
        assert!(is_course_number("EE 2310"));
        assert!(is_course_number("ECS 3390"));
        assert!(is_course_number("MATH 2418"));
        assert!(is_course_number("CS 1200 Introduction")); // only the start is checked
    }

    #[test]
    fn test_is_course_number_invalid() {
        assert!(!is_course_number(""));
        assert!(!is_course_number("C 1200")); // 1 letter
        assert!(!is_course_number("HISTO 1301")); // 5 letters
        assert!(!is_course_number("cs 1200")); // lowercase
        assert!(!is_course_number("CS 120")); // 3 digits
        assert!(!is_course_number("CS1200")); // no space
        assert!(!is_course_number("Free electives"));
    }

    #[test]
    fn test_electives_pattern() {
        assert!(ELECTIVES_PATTERN.is_match("Free Electives: 9 semester credit hours"));
        assert!(ELECTIVES_PATTERN.is_match("Guided electives"));
        assert!(!ELECTIVES_PATTERN.is_match("Major Core Courses"));
    }

    #[test]
    fn test_is_remote_source() {
        assert!(is_remote_source("https://catalog.utdallas.edu/"));
        assert!(is_remote_source("HTTP://catalog.utdallas.edu/"));
        assert!(!is_remote_source("catalog.html"));
        assert!(!is_remote_source("/tmp/https.html"));
    }

    #[test]
    fn test_validate_source_valid() {
        assert!(validate_source("https://catalog.utdallas.edu/2015/undergraduate/programs").is_ok());
        assert!(validate_source("http://localhost:8080/page").is_ok());
        assert!(validate_source("page.html").is_ok());
        assert!(validate_source("/var/tmp/catalog.html").is_ok());
    }

    #[test]
    fn test_validate_source_invalid() {
        assert!(validate_source("").is_err());
        assert!(validate_source("  ").is_err());
        assert!(validate_source("http://").is_err());
        assert!(validate_source("https://exa mple.com").is_err());
    }
}
