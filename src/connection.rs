// Import necessary crates and modules
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::credentials::ReportConfig;
use crate::error::ReportError;

// Pattern matching one `<url>; rel="next"` entry of a Link response header.
static NEXT_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<([^>]+)>\s*;\s*rel="next""#).unwrap());

/// Authenticated HTTP access to one Canvas instance.
///
/// Owns the blocking `reqwest` client together with the loaded
/// configuration; every fetching operation borrows this value instead of
/// reaching for shared state. Requests are sequential, one in flight at a
/// time, with a single attempt each; a failed request aborts the fetch it
/// belongs to.
///
/// Fields:
/// - `config`: The settings loaded at startup (base URL, token, student name).
/// - `http`: The blocking HTTP client reused across all requests of the run.
pub struct CanvasClient {
    pub config: ReportConfig,
    http: Client,
}

impl CanvasClient {
    pub fn new(config: ReportConfig) -> CanvasClient {
        CanvasClient {
            config,
            http: Client::new(),
        }
    }

    /// Builds an absolute URL for a resource path under the configured base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Issues one authenticated GET against `url`.
    ///
    /// Returns the response when the status is a success. A network error or
    /// a non-success status becomes a `ReportError::Transport`; no retry is
    /// performed.
    fn get(&self, url: &str) -> Result<Response, ReportError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .map_err(|e| {
                ReportError::Transport(format!("request to {} failed with error: {}", url, e))
            })?;

        if !response.status().is_success() {
            return Err(ReportError::Transport(format!(
                "request to {} failed with status: {}",
                url,
                response.status()
            )));
        }
        Ok(response)
    }

    /// Fetches a single resource and parses it into `T`. No pagination.
    pub fn fetch_one<T: DeserializeOwned>(&self, url: &str) -> Result<T, ReportError> {
        let response = self.get(url)?;
        parse_body(url, &body_text(url, response)?)
    }

    /// Fetches every page of a list resource, following `rel="next"` links.
    ///
    /// Issues a GET against `url`, parses the body into records of `T`, and
    /// repeats against the URL of the Link header's `rel="next"` entry until
    /// no such entry is returned. Records accumulate in server order across
    /// pages. Any page failure aborts the whole fetch; the caller receives
    /// no partial result.
    pub fn fetch_paginated<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ReportError> {
        let mut records = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            let response = self.get(&page_url)?;
            next = next_link(&response);
            let page: Vec<T> = parse_body(&page_url, &body_text(&page_url, response)?)?;
            debug!("fetched {} records from {}", page.len(), page_url);
            records.extend(page);
        }
        Ok(records)
    }
}

fn body_text(url: &str, response: Response) -> Result<String, ReportError> {
    response.text().map_err(|e| {
        ReportError::Transport(format!("failed to read response from {} with error: {}", url, e))
    })
}

fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ReportError> {
    serde_json::from_str(body).map_err(|e| {
        ReportError::Transport(format!("failed to parse response from {} with error: {}", url, e))
    })
}

/// Extracts the `rel="next"` URL from a response's Link header, if any.
fn next_link(response: &Response) -> Option<String> {
    let header = response.headers().get("link")?.to_str().ok()?;
    next_link_in(header)
}

/// Finds the `rel="next"` entry in a Link header value.
///
/// The header carries comma-separated `<url>; rel="..."` entries; the URL
/// between the angle brackets of the `rel="next"` entry is the next page.
/// Absence means the last page was reached.
fn next_link_in(header: &str) -> Option<String> {
    header
        .split(',')
        .find_map(|entry| NEXT_LINK.captures(entry).map(|caps| caps[1].to_string()))
}
