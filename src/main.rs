// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seo_agent::app::{create_router, AppState, VERSION};
use seo_agent::models::config::AnalyzerConfig;
use seo_agent::services::analyzer::Analyzer;
use seo_agent::services::logging::init_tracing;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "seo-agent", version = VERSION, about = "Score a web page's SEO basics")]
struct Cli {
    /// Per-request timeout in seconds (overrides SEO_AGENT_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// User-Agent header for outgoing requests (overrides SEO_AGENT_USER_AGENT)
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one page and print the report as JSON
    Analyze {
        /// Page to analyze; http:// is assumed when no scheme is given
        url: String,
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::from_env()?;
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &self.user_agent {
            config = config.with_user_agent(agent.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let analyzer = Analyzer::new(&cli.analyzer_config()?)?;

    match cli.command {
        Command::Analyze { url, pretty } => {
            let report = analyzer.analyze(&url).await?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Command::Serve { port } => {
            let app = create_router(AppState {
                analyzer: Arc::new(analyzer),
            });

            // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;

            info!("seo-agent v{} listening on {}", VERSION, addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
