// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Read-only view over a parsed HTML page.
//!
//! Checkers only see the accessors below, never the parser's node types, so
//! the HTML library can change without touching the scoring code.

use crate::models::error::AnalysisError;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// One `<img>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    /// `alt` attribute is present and non-empty
    pub has_alt: bool,
}

struct Selectors {
    title: Selector,
    meta: Selector,
    h1: Selector,
    img: Selector,
    anchor: Selector,
}

// Compiled once per process and shared by every document
static SELECTORS: LazyLock<Result<Selectors, String>> = LazyLock::new(Selectors::compile);

impl Selectors {
    fn compile() -> Result<Self, String> {
        Ok(Self {
            title: compile("title")?,
            meta: compile("meta")?,
            h1: compile("h1")?,
            img: compile("img")?,
            anchor: compile("a[href]")?,
        })
    }

    fn shared() -> Result<&'static Self, AnalysisError> {
        SELECTORS
            .as_ref()
            .map_err(|e| AnalysisError::ParseFailed(e.clone()))
    }
}

fn compile(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("invalid selector '{css}': {e}"))
}

/// Parsed HTML document
pub struct Document {
    html: Html,
    selectors: &'static Selectors,
}

impl Document {
    /// Parse an HTML body. Malformed markup is repaired by the parser, not rejected.
    pub fn parse(html: &str) -> Result<Self, AnalysisError> {
        Ok(Self {
            html: Html::parse_document(html),
            selectors: Selectors::shared()?,
        })
    }

    /// Trimmed text of the first `<title>`, `None` when missing or blank
    pub fn title(&self) -> Option<String> {
        self.html
            .select(&self.selectors.title)
            .next()
            .and_then(|title| non_empty(&element_text(title)))
    }

    /// Trimmed `content` of the first `<meta>` whose `attr` equals `value`.
    ///
    /// Only the first matching tag is considered; if its content is empty the
    /// result is `None` even when a later duplicate has a value.
    pub fn meta(&self, attr: &str, value: &str) -> Option<String> {
        self.find_meta(attr, value)
            .and_then(|meta| meta.value().attr("content"))
            .and_then(non_empty)
    }

    /// Whether a `<meta>` with `attr` equal to `value` exists, content or not
    pub fn has_meta(&self, attr: &str, value: &str) -> bool {
        self.find_meta(attr, value).is_some()
    }

    fn find_meta(&self, attr: &str, value: &str) -> Option<ElementRef<'_>> {
        self.html
            .select(&self.selectors.meta)
            .find(|meta| meta.value().attr(attr) == Some(value))
    }

    /// Trimmed text of every `<h1>`, in document order
    pub fn h1_texts(&self) -> Vec<String> {
        self.html
            .select(&self.selectors.h1)
            .map(|h1| element_text(h1).trim().to_string())
            .collect()
    }

    pub fn images(&self) -> Vec<Image> {
        self.html
            .select(&self.selectors.img)
            .map(|img| Image {
                has_alt: img.value().attr("alt").is_some_and(|alt| !alt.is_empty()),
            })
            .collect()
    }

    /// Raw `href` values of all anchors that carry one, empty values included
    pub fn anchors(&self) -> Vec<String> {
        self.html
            .select(&self.selectors.anchor)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Every text node in the document joined by single spaces.
    ///
    /// Script and style contents are text nodes too and are included.
    pub fn visible_text(&self) -> String {
        let nodes: Vec<&str> = self
            .html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect();
        nodes.join(" ")
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
