// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::analysis::{
    ContentCheck, LinksCheck, OnPageCheck, Report, ScoreBreakdown, SocialCheck, TechnicalCheck,
};

/// Output of the five checkers for one page
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChecks {
    pub technical: TechnicalCheck,
    pub onpage: OnPageCheck,
    pub content: ContentCheck,
    pub links: LinksCheck,
    pub social: SocialCheck,
}

/// Package checker output and score into the final report
pub fn assemble(
    url: &str,
    status_code: u16,
    checks: CategoryChecks,
    breakdown: ScoreBreakdown,
) -> Report {
    Report {
        url: url.to_string(),
        status_code,
        technical: checks.technical,
        onpage: checks.onpage,
        content: checks.content,
        links: checks.links,
        social: checks.social,
        breakdown,
        score: breakdown.total,
    }
}
