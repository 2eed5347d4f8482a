// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use utoipa::ToSchema;

/// Technical setup of the site hosting the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnicalCheck {
    /// Page was requested over https
    pub https: bool,
    /// `/sitemap.xml` answered 200
    pub sitemap: bool,
    /// `/robots.txt` answered 200
    pub robots: bool,
}

/// On-page metadata found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OnPageCheck {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Text of every `<h1>`, in document order
    pub h1_tags: Vec<String>,
    pub image_count: usize,
    pub images_with_alt: usize,
}

/// Content quality signals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentCheck {
    pub word_count: usize,
    /// Lowercased entries of the `keywords` meta tag
    pub keywords: BTreeSet<String>,
    /// Whether each keyword occurs anywhere in the page text
    pub keyword_presence: BTreeMap<String, bool>,
}

impl ContentCheck {
    /// True when at least one declared keyword occurs in the text
    pub fn any_keyword_present(&self) -> bool {
        self.keyword_presence.values().any(|present| *present)
    }
}

/// Link structure of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinksCheck {
    pub internal_count: usize,
    pub external_count: usize,
}

/// Social markup (Open Graph / Twitter cards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialCheck {
    pub has_social_tags: bool,
}

/// Per-category points plus the overall score, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreBreakdown {
    /// 0 to 25
    pub technical: f64,
    /// 0 to 25
    pub onpage: f64,
    /// 0 to 20
    pub content: f64,
    /// 0 to 15
    pub links: f64,
    /// 0 or 15
    pub social: f64,
    /// 0 to 100
    pub total: f64,
}

/// Final result of analyzing one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Report {
    /// The normalized URL that was analyzed
    pub url: String,
    /// HTTP status of the page response
    pub status_code: u16,
    pub technical: TechnicalCheck,
    pub onpage: OnPageCheck,
    pub content: ContentCheck,
    pub links: LinksCheck,
    pub social: SocialCheck,
    pub breakdown: ScoreBreakdown,
    /// Same value as `breakdown.total`
    pub score: f64,
}
