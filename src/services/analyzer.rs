// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::analysis::Report;
use crate::models::config::AnalyzerConfig;
use crate::models::error::AnalysisError;
use crate::models::fetch::{FetchResult, ParsedUrl};
use crate::services::checks::{
    check_content, check_links, check_onpage, check_social, check_technical,
};
use crate::services::document::Document;
use crate::services::fetcher::Fetcher;
use crate::services::logging::redact_url;
use crate::services::report::{assemble, CategoryChecks};
use crate::services::scorer::score;
use tracing::info;

/// Runs the fetch, parse, check, score pipeline for one URL at a time.
///
/// Holds no per-analysis state, so a single instance can serve concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Fetcher,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// Analyze the page at `raw_url`.
    ///
    /// Fails only when the URL is unusable or the page itself cannot be
    /// fetched; robots.txt and sitemap.xml problems show up in the report.
    pub async fn analyze(&self, raw_url: &str) -> Result<Report, AnalysisError> {
        let url = ParsedUrl::parse(raw_url)?;
        info!(url = %redact_url(url.as_url()), "Analyzing page");

        let fetched = self.fetcher.fetch(&url).await?;
        let report = Self::analyze_fetched(&url, fetched)?;

        info!(
            url = %redact_url(url.as_url()),
            status = report.status_code,
            score = report.score,
            "Analysis complete"
        );
        Ok(report)
    }

    /// Run parse, checks, scoring and assembly on an already fetched page.
    ///
    /// Deterministic: the same input always yields the same report.
    pub fn analyze_fetched(url: &ParsedUrl, fetched: FetchResult) -> Result<Report, AnalysisError> {
        let document = Document::parse(&fetched.html_body)?;

        let checks = CategoryChecks {
            technical: check_technical(url, &fetched),
            onpage: check_onpage(&document),
            content: check_content(&document),
            links: check_links(&document, url),
            social: check_social(&document),
        };
        let breakdown = score(
            &checks.technical,
            &checks.onpage,
            &checks.content,
            &checks.links,
            &checks.social,
        );

        Ok(assemble(url.as_str(), fetched.status_code, checks, breakdown))
    }
}

/// Analyze a page with the default configuration
pub async fn analyze(raw_url: &str) -> Result<Report, AnalysisError> {
    Analyzer::new(&AnalyzerConfig::default())?
        .analyze(raw_url)
        .await
}
