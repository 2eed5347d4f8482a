// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Single page SEO analysis: fetch a URL, run technical, on-page, content,
//! link and social checks, and reduce them to a 0-100 score.

pub mod app;
pub mod models;
pub mod services;

pub use models::analysis::Report;
pub use models::error::{AnalysisError, AnalysisErrorKind};
pub use services::analyzer::{analyze, Analyzer};
