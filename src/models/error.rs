// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failures that abort an analysis.
///
/// Everything else (missing robots.txt, absent tags, broken links) is absorbed
/// into default values on the report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input could not be turned into an http(s) URL with a host
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The page itself could not be retrieved
    #[error("Failed to fetch page: {0}")]
    FetchFailed(String),
    /// The response could not be turned into a document
    #[error("Failed to parse page: {0}")]
    ParseFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisErrorKind {
    InvalidUrl,
    FetchFailed,
    ParseFailed,
}

impl AnalysisError {
    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            AnalysisError::InvalidUrl(_) => AnalysisErrorKind::InvalidUrl,
            AnalysisError::FetchFailed(_) => AnalysisErrorKind::FetchFailed,
            AnalysisError::ParseFailed(_) => AnalysisErrorKind::ParseFailed,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalysisError::FetchFailed(format!("request timed out: {e}"))
        } else {
            AnalysisError::FetchFailed(e.to_string())
        }
    }
}
