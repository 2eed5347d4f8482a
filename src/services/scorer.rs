// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Weighted scoring of the category checks.
//!
//! | Category  | Points |
//! |-----------|--------|
//! | Technical | 0..=25 |
//! | On-page   | 0..=25 |
//! | Content   | 0..=20 |
//! | Links     | 0..=15 |
//! | Social    | 0 or 15 |

use crate::models::analysis::{
    ContentCheck, LinksCheck, OnPageCheck, ScoreBreakdown, SocialCheck, TechnicalCheck,
};

pub const TECHNICAL_MAX: f64 = 25.0;
pub const ONPAGE_MAX: f64 = 25.0;
pub const CONTENT_MAX: f64 = 20.0;
pub const LINKS_MAX: f64 = 15.0;
pub const SOCIAL_MAX: f64 = 15.0;

/// Pages with more words than this earn the word-count points
const MIN_WORD_COUNT: usize = 300;
/// Internal/external link counts at which those link points saturate
const LINK_SATURATION: f64 = 5.0;
/// Share of images that must carry alt text
const MIN_ALT_RATIO: f64 = 0.5;

/// Fraction of `signals` that are true, scaled to `max`
fn proportion(signals: &[bool], max: f64) -> f64 {
    let hits = signals.iter().filter(|signal| **signal).count();
    hits as f64 / signals.len() as f64 * max
}

pub fn technical_points(technical: &TechnicalCheck) -> f64 {
    proportion(
        &[technical.https, technical.sitemap, technical.robots],
        TECHNICAL_MAX,
    )
}

pub fn onpage_points(onpage: &OnPageCheck) -> f64 {
    // A page without images has nothing to fix
    let alt_ratio = if onpage.image_count == 0 {
        1.0
    } else {
        onpage.images_with_alt as f64 / onpage.image_count as f64
    };

    proportion(
        &[
            onpage.title.is_some(),
            onpage.description.is_some(),
            !onpage.h1_tags.is_empty(),
            alt_ratio > MIN_ALT_RATIO,
        ],
        ONPAGE_MAX,
    )
}

pub fn content_points(content: &ContentCheck) -> f64 {
    let mut points = 0.0;
    if content.word_count > MIN_WORD_COUNT {
        points += 10.0;
    }
    if !content.keywords.is_empty() && content.any_keyword_present() {
        points += 10.0;
    }
    f64::min(points, CONTENT_MAX)
}

pub fn links_points(links: &LinksCheck) -> f64 {
    let internal = f64::min(links.internal_count as f64 / LINK_SATURATION, 1.0) * 10.0;
    let external = f64::min(links.external_count as f64 / LINK_SATURATION, 1.0) * 5.0;
    f64::min(internal + external, LINKS_MAX)
}

pub fn social_points(social: &SocialCheck) -> f64 {
    if social.has_social_tags {
        SOCIAL_MAX
    } else {
        0.0
    }
}

/// Round half away from zero to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score all five categories.
///
/// The total is summed from unrounded category points and then rounded, so it
/// can differ by a hundredth from the sum of the rounded breakdown values.
pub fn score(
    technical: &TechnicalCheck,
    onpage: &OnPageCheck,
    content: &ContentCheck,
    links: &LinksCheck,
    social: &SocialCheck,
) -> ScoreBreakdown {
    let technical = technical_points(technical);
    let onpage = onpage_points(onpage);
    let content = content_points(content);
    let links = links_points(links);
    let social = social_points(social);

    let total = (technical + onpage + content + links + social).clamp(0.0, 100.0);

    ScoreBreakdown {
        technical: round2(technical),
        onpage: round2(onpage),
        content: round2(content),
        links: round2(links),
        social: round2(social),
        total: round2(total),
    }
}
