// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Timeout applied to every outbound request unless configured otherwise
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings shared by every analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Upper bound for each HTTP request (page, robots.txt, sitemap.xml)
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from environment variables.
    ///
    /// Both `SEO_AGENT_TIMEOUT_SECS` and `SEO_AGENT_USER_AGENT` are optional;
    /// a timeout that is set but not a positive number is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("SEO_AGENT_TIMEOUT_SECS").ok(),
            std::env::var("SEO_AGENT_USER_AGENT").ok(),
        )
    }

    fn from_vars(timeout_secs: Option<String>, user_agent: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = timeout_secs {
            config.timeout = Duration::from_secs(parse_timeout_secs(&raw)?);
        }
        if let Some(agent) = user_agent.filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| anyhow!("SEO_AGENT_TIMEOUT_SECS must be a valid number, got: {}", raw))?;
    if secs == 0 {
        return Err(anyhow!("SEO_AGENT_TIMEOUT_SECS must be greater than zero"));
    }
    Ok(secs)
}

fn default_user_agent() -> String {
    format!("SeoAgentBot/{}", env!("SEO_AGENT_VERSION"))
}
