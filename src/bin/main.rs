//! Integration Alerts Agent entry point
//!
//! Polls the published alerts feed and reconciles matches against the
//! loaded components into resolution-center issues.

use std::collections::HashSet;
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use colored::ColoredString;
use integration_alerts::client::AlertsFeedClient;
use integration_alerts::contracts::{IssueSeverity, ALERTS_BASE_URL};
use integration_alerts::engine::AlertEngine;
use integration_alerts::poller::AlertPoller;
use integration_alerts::registry::{InMemoryIssueRegistry, IssueRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "integration-alerts")]
#[command(about = "Integration Alerts Agent - alert feed polling and issue reconciliation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single refresh and print the resulting issues
    Poll {
        /// Base URL of the alerts feed
        #[arg(long, default_value = ALERTS_BASE_URL, env = "ALERTS_FEED_URL")]
        feed_url: String,

        /// Running platform version to check alert ranges against
        #[arg(long, env = "PLATFORM_VERSION")]
        platform_version: String,

        /// Loaded integration component (repeatable)
        #[arg(short, long = "component")]
        components: Vec<String>,

        /// Emit issues as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Poll the feed on a fixed interval until interrupted
    Watch {
        /// Base URL of the alerts feed
        #[arg(long, default_value = ALERTS_BASE_URL, env = "ALERTS_FEED_URL")]
        feed_url: String,

        /// Running platform version to check alert ranges against
        #[arg(long, env = "PLATFORM_VERSION")]
        platform_version: String,

        /// Loaded integration component (repeatable)
        #[arg(short, long = "component")]
        components: Vec<String>,

        /// Seconds between refreshes
        #[arg(long, default_value = "3600")]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Poll {
            feed_url,
            platform_version,
            components,
            json,
        } => {
            let mut poller = build_poller(&feed_url, &platform_version, components)?;
            let outcome = poller.refresh().await?;
            let issues = poller.registry().issues();

            if json {
                println!("{}", serde_json::to_string_pretty(&issues)?);
            } else {
                for issue in &issues {
                    println!(
                        "{} {} ({})",
                        severity_label(issue.severity),
                        issue.issue_id,
                        issue.learn_more_url
                    );
                }
                println!(
                    "{} active, {} created, {} removed",
                    outcome.active, outcome.created, outcome.removed
                );
            }
        }

        Commands::Watch {
            feed_url,
            platform_version,
            components,
            interval_secs,
        } => {
            let mut poller = build_poller(&feed_url, &platform_version, components)?;

            tracing::info!(
                feed_url = %feed_url,
                interval_secs,
                "starting alert poller"
            );
            poller.run(Duration::from_secs(interval_secs)).await;
        }
    }

    Ok(())
}

fn severity_label(severity: IssueSeverity) -> ColoredString {
    match severity {
        IssueSeverity::Critical => severity.as_str().red().bold(),
        IssueSeverity::Error => severity.as_str().red(),
        IssueSeverity::Warning => severity.as_str().yellow().bold(),
    }
}

fn build_poller(
    feed_url: &str,
    platform_version: &str,
    components: Vec<String>,
) -> anyhow::Result<AlertPoller<InMemoryIssueRegistry>> {
    let client = AlertsFeedClient::new(feed_url)?;
    let engine = AlertEngine::new(platform_version)?;
    let components: HashSet<String> = components.into_iter().collect();

    Ok(AlertPoller::new(
        client,
        engine,
        components,
        InMemoryIssueRegistry::new(),
    ))
}
