// --- File: crates/ptslot_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError, Url};
use std::time::Duration;

use crate::error::{config_error, PtslotError};

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// Appends path segments to a base URL, percent-encoding each segment.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, PtslotError> {
    let mut url = Url::parse(base_url)
        .map_err(|err| config_error(format!("invalid base url '{}': {}", base_url, err)))?;
    url.path_segments_mut()
        .map_err(|_| config_error(format!("base url '{}' cannot have a path", base_url)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
