// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::error::AnalysisError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A normalized http(s) URL with its components split out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
}

impl ParsedUrl {
    /// Normalize raw user input and parse it.
    ///
    /// Input without an `http://` or `https://` prefix gets `http://` prepended.
    /// Anything that does not end up as an http(s) URL with a host is rejected.
    pub fn parse(raw_url: &str) -> Result<Self, AnalysisError> {
        let normalized = normalize_url(raw_url);
        let url = Url::parse(&normalized)
            .map_err(|e| AnalysisError::InvalidUrl(format!("{normalized}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AnalysisError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if matches!(url.host_str(), None | Some("")) {
            return Err(AnalysisError::InvalidUrl(format!("{normalized}: URL has no host")));
        }

        Ok(Self { url })
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn is_https(&self) -> bool {
        self.scheme() == "https"
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Absolute URL of a site-root resource such as `/robots.txt`.
    /// Keeps the port of the analyzed page.
    pub fn site_resource(&self, resource_path: &str) -> Url {
        let mut resource = self.url.clone();
        resource.set_path(resource_path);
        resource.set_query(None);
        resource.set_fragment(None);
        resource
    }
}

/// Prepend `http://` unless the input already names an http(s) scheme
pub fn normalize_url(raw_url: &str) -> String {
    let trimmed = raw_url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Everything the network step hands over to the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub html_body: String,
    pub status_code: u16,
    /// `/robots.txt` answered 200. False on any error.
    pub robots_ok: bool,
    /// `/sitemap.xml` answered 200. False on any error.
    pub sitemap_ok: bool,
}
