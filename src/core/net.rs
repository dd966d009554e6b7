// src/core/net.rs

// Single blocking HTTP GET. No retries, no timeout, no proxy from the environment.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::consts::USER_AGENT;
use crate::error::Result;

/// Fetch `url` and return the decoded response body.
///
/// Transport failures and non-2xx statuses are both reported as
/// `ScrapeError::Http`; callers do not distinguish them.
pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .no_proxy()
        .build()?;

    info!(%url, "fetching page");
    let resp = client.get(url).send()?.error_for_status()?;
    debug!(status = %resp.status(), final_url = %resp.url(), "response received");

    let body = resp.text()?;
    info!(bytes = body.len(), "page downloaded");
    Ok(body)
}
