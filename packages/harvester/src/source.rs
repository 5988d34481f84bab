//! Resolving the command-line source into catalog markup.
//!
//! A catalog page is normally fetched over HTTP, but a saved copy of the page
//! can be read from disk instead.

use std::fs;
use std::path::PathBuf;

use crate::config::{is_remote_source, validate_source};
use crate::error::Result;
use crate::http::{bytes_to_string, create_client, download_page};

/// Where the catalog markup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An http(s) URL.
    Remote(String),
    /// A saved HTML file.
    Local(PathBuf),
}

impl CatalogSource {
    /// Classify a source argument.
    ///
    /// # Examples
    /// ```
    /// use degreeplan_harvester::source::CatalogSource;
    ///
    /// let source = CatalogSource::parse("https://catalog.utdallas.edu/").unwrap();
    /// assert!(matches!(source, CatalogSource::Remote(_)));
    ///
    /// let source = CatalogSource::parse("saved/cs.html").unwrap();
    /// assert!(matches!(source, CatalogSource::Local(_)));
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        validate_source(source)?;
        let trimmed = source.trim();
        if is_remote_source(trimmed) {
            Ok(Self::Remote(trimmed.to_string()))
        } else {
            Ok(Self::Local(PathBuf::from(trimmed)))
        }
    }

    /// Human-readable description for progress output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }

    /// Load the catalog markup.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Remote(url) => {
                let client = create_client()?;
                let bytes = download_page(&client, url)?;
                Ok(bytes_to_string(&bytes, &format!("catalog page {url}")))
            }
            Self::Local(path) => {
                tracing::debug!(path = %path.display(), "Reading saved catalog page");
                let bytes = fs::read(path)?;
                Ok(bytes_to_string(
                    &bytes,
                    &format!("catalog file {}", path.display()),
                ))
            }
        }
    }
}

/// Classify and load a catalog source in one step.
pub fn load_source(source: &str) -> Result<String> {
    CatalogSource::parse(source)?.load()
}
