// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::config::AnalyzerConfig;
use crate::models::error::AnalysisError;
use crate::models::fetch::{FetchResult, ParsedUrl};
use crate::services::logging::redact_url;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Retrieves a page together with its site's robots.txt and sitemap.xml
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher whose requests are all bounded by `config.timeout`
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::FetchFailed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch the page, robots.txt and sitemap.xml concurrently.
    ///
    /// Only a failure of the page request is an error. The two site resources
    /// resolve to `false` on any problem.
    pub async fn fetch(&self, url: &ParsedUrl) -> Result<FetchResult, AnalysisError> {
        let (page, robots_ok, sitemap_ok) = tokio::join!(
            self.fetch_page(url.as_url()),
            self.resource_available(url.site_resource("/robots.txt")),
            self.resource_available(url.site_resource("/sitemap.xml")),
        );

        let (status_code, html_body) = page.inspect_err(|e| {
            warn!(url = %redact_url(url.as_url()), error = %e, "Page fetch failed");
        })?;

        Ok(FetchResult {
            html_body,
            status_code,
            robots_ok,
            sitemap_ok,
        })
    }

    /// GET the page body. Any HTTP status is accepted; transport errors are not.
    async fn fetch_page(&self, url: &Url) -> Result<(u16, String), AnalysisError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(url = %redact_url(url), %status, "Page answered with non-success status");
        }

        let body = response.text().await?;
        Ok((status.as_u16(), body))
    }

    /// True only when `url` answers 200
    async fn resource_available(&self, url: Url) -> bool {
        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(url = %redact_url(&url), %status, "Checked site resource");
                status == StatusCode::OK
            }
            Err(e) => {
                // Unreachable resources count as missing
                debug!(url = %redact_url(&url), error = %e, "Site resource unreachable");
                false
            }
        }
    }
}
