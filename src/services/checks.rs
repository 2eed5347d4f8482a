// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The five category checkers.
//!
//! Each one is a pure function over the parsed document and page URL. None of
//! them fail: missing markup shows up as `None`, zero or `false`.

use crate::models::analysis::{ContentCheck, LinksCheck, OnPageCheck, SocialCheck, TechnicalCheck};
use crate::models::fetch::{FetchResult, ParsedUrl};
use crate::services::document::Document;
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

pub fn check_technical(url: &ParsedUrl, fetched: &FetchResult) -> TechnicalCheck {
    TechnicalCheck {
        https: url.is_https(),
        sitemap: fetched.sitemap_ok,
        robots: fetched.robots_ok,
    }
}

pub fn check_onpage(document: &Document) -> OnPageCheck {
    let images = document.images();
    OnPageCheck {
        title: document.title(),
        description: document.meta("name", "description"),
        h1_tags: document.h1_texts(),
        image_count: images.len(),
        images_with_alt: images.iter().filter(|image| image.has_alt).count(),
    }
}

pub fn check_content(document: &Document) -> ContentCheck {
    let text = document.visible_text();
    let word_count = text.split_whitespace().count();

    let keywords = document
        .meta("name", "keywords")
        .map(|raw| parse_keywords(&raw))
        .unwrap_or_default();

    // Substring match on purpose: "seo" is found inside "seos"
    let lowered = text.to_lowercase();
    let keyword_presence = keywords
        .iter()
        .map(|keyword| (keyword.clone(), lowered.contains(keyword.as_str())))
        .collect::<BTreeMap<_, _>>();

    ContentCheck {
        word_count,
        keywords,
        keyword_presence,
    }
}

/// Split a `keywords` meta value on commas, trimmed and lowercased.
///
/// Blank entries (`"seo,"`) are kept as `""`, which matches any text.
fn parse_keywords(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .collect()
}

/// Where an anchor points relative to the analyzed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Internal,
    External,
}

/// Classify one `href` against the page URL.
///
/// Relative and protocol-relative links are resolved against the page first.
/// Links without a host (`mailto:`, `javascript:`) count as internal.
/// Unparsable links return `None` and are dropped from both counts. That
/// covers an empty authority (`http:///x`) and text with inner whitespace.
pub fn classify_link(href: &str, page: &ParsedUrl) -> Option<LinkTarget> {
    let href = href.trim();
    if href.contains(|c: char| c.is_ascii_whitespace()) || has_empty_authority(href) {
        return None;
    }

    let target = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => page.as_url().join(href).ok()?,
        Err(_) => return None,
    };

    match target.host_str() {
        None | Some("") => Some(LinkTarget::Internal),
        Some(host) if host == page.host() => Some(LinkTarget::Internal),
        Some(_) => Some(LinkTarget::External),
    }
}

/// `scheme://` or `//` followed directly by a path, query, fragment or nothing.
///
/// The URL parser skips the extra slashes of `http:///x` and would read `x`
/// as the host.
fn has_empty_authority(href: &str) -> bool {
    let after_slashes = match href.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => match href.strip_prefix("//") {
            Some(rest) => rest,
            None => return false,
        },
    };
    after_slashes.is_empty() || after_slashes.starts_with(['/', '\\', '?', '#'])
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub fn check_links(document: &Document, page: &ParsedUrl) -> LinksCheck {
    let mut links = LinksCheck {
        internal_count: 0,
        external_count: 0,
    };

    for href in document.anchors() {
        match classify_link(&href, page) {
            Some(LinkTarget::Internal) => links.internal_count += 1,
            Some(LinkTarget::External) => links.external_count += 1,
            None => {}
        }
    }

    links
}

pub fn check_social(document: &Document) -> SocialCheck {
    SocialCheck {
        has_social_tags: document.has_meta("property", "og:title")
            || document.has_meta("name", "twitter:card"),
    }
}
