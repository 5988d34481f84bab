//! HTTP client wrapper for downloading catalog pages.

use std::io::Read;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, MAX_RESPONSE_SIZE};
use crate::error::{HarvesterError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("degreeplan-harvester/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download content from a URL with retry logic.
///
/// Uses exponential backoff for transient failures (network errors, 5xx responses).
/// Client errors (4xx) fail immediately.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `max_size` - Largest accepted response body in bytes
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response.error_for_status()?;

                if let Some(length) = response.content_length() {
                    if length > max_size {
                        return Err(HarvesterError::ResponseTooLarge {
                            url: url.to_string(),
                            size: length,
                            limit: max_size,
                        });
                    }
                }

                // Chunked responses carry no content length up front
                let bytes = read_limited(response, url, max_size)?;

                tracing::debug!(url, bytes = bytes.len(), "Downloaded catalog page");
                return Ok(bytes);
            }
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                return Err(HarvesterError::Http(e));
            }
        }
    }

    Err(HarvesterError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Read a body, giving up as soon as it exceeds `max_size` bytes.
///
/// At most `max_size + 1` bytes are buffered, so an oversized body is reported
/// with that many bytes as its size.
fn read_limited(body: impl Read, url: &str, max_size: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    body.take(max_size.saturating_add(1)).read_to_end(&mut bytes)?;

    if bytes.len() as u64 > max_size {
        return Err(HarvesterError::ResponseTooLarge {
            url: url.to_string(),
            size: bytes.len() as u64,
            limit: max_size,
        });
    }

    Ok(bytes)
}

/// Download a catalog page with the default size limit.
///
/// HTTP failures are reported as `HarvesterError::Download` naming the URL.
pub fn download_page(client: &Client, url: &str) -> Result<Vec<u8>> {
    download_bytes(client, url, MAX_RESPONSE_SIZE).map_err(|e| {
        if let HarvesterError::Http(source) = e {
            HarvesterError::Download {
                url: url.to_string(),
                source,
            }
        } else {
            e
        }
    })
}

/// Decode a response body as UTF-8.
///
/// Invalid sequences are replaced with U+FFFD and a warning is logged.
///
/// # Arguments
/// * `bytes` - Raw body
/// * `what` - Description used in the warning
pub fn bytes_to_string(bytes: &[u8], what: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "{what} is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_bytes_to_string_valid() {
        assert_eq!(bytes_to_string("CS 1200".as_bytes(), "page"), "CS 1200");
    }

    #[test]
    fn test_bytes_to_string_lossy() {
        let bytes = [b'C', b'S', 0xFF, b' ', b'1'];
        assert_eq!(bytes_to_string(&bytes, "page"), "CS\u{FFFD} 1");
    }

    #[test]
    fn test_download_invalid_url_fails_without_retry() {
        let client = create_client().unwrap();
        let result = download_page(&client, "not a url");
        assert!(matches!(result, Err(HarvesterError::Download { .. })));
    }

    #[test]
    fn test_read_limited_within_limit() {
        let body: &[u8] = b"<p>catalog</p>";
        let bytes = read_limited(body, "http://catalog.test/", body.len() as u64).unwrap();
        assert_eq!(bytes, body);
    }

    #[test]
    fn test_read_limited_stops_at_limit() {
        // An endless body must be cut off, not buffered
        let result = read_limited(std::io::repeat(b'x'), "http://catalog.test/", 1024);
        assert!(matches!(
            result,
            Err(HarvesterError::ResponseTooLarge { size: 1025, limit: 1024, .. })
        ));
    }
}
