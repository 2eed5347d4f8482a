// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to analyze a single page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// URL as typed by the user; `http://` is assumed when no scheme is given
    #[serde(rename = "url")]
    pub raw_url: String,
}
