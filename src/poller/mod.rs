//! Scheduled alert poller
//!
//! Runs one refresh at startup and then on a fixed interval, reconciling
//! the feed against previously reported issues. There is a single timer
//! source, so refreshes never overlap; the fetch is the only suspension
//! point inside a cycle.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::client::AlertsFeedClient;
use crate::engine::AlertEngine;
use crate::error::Result;
use crate::registry::IssueRegistry;

/// Default refresh interval, matching the feed's publication cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Scheduled alert poller
pub struct AlertPoller<R: IssueRegistry> {
    client: AlertsFeedClient,
    engine: AlertEngine,
    components: HashSet<String>,
    registry: R,
    known: HashSet<String>,
}

/// Summary of one reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Issues active after the refresh
    pub active: usize,
    /// Issues newly created by the refresh
    pub created: usize,
    /// Stale issues removed by the refresh
    pub removed: usize,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Total refresh duration in milliseconds
    pub duration_ms: u64,
}

impl<R: IssueRegistry> AlertPoller<R> {
    /// Create a poller for the given loaded-component set
    pub fn new(
        client: AlertsFeedClient,
        engine: AlertEngine,
        components: HashSet<String>,
        registry: R,
    ) -> Self {
        Self {
            client,
            engine,
            components,
            registry,
            known: HashSet::new(),
        }
    }

    /// The issue registry being reconciled
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Fetch the feed and reconcile the issue registry against it.
    ///
    /// On success the registry holds exactly the issues active per this
    /// fetch: new ones are created, surviving ones updated in place, stale
    /// ones deleted. An empty feed body clears every previously reported
    /// issue. On a transport or parse failure the registry is left
    /// untouched and the error is returned for the caller to log.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome> {
        let start = Instant::now();
        let records = self.client.fetch_alerts().await?;

        let active = self.engine.active_issues(&records, &self.components);
        let active_ids: HashSet<String> = active.keys().cloned().collect();

        let mut created = 0;
        for (issue_id, issue) in active {
            if !self.known.contains(&issue_id) {
                info!(issue_id = %issue_id, "registering alert issue");
                created += 1;
            }
            self.registry.create_issue(issue);
        }

        let mut removed = 0;
        for stale in self.known.difference(&active_ids) {
            info!(issue_id = %stale, "clearing stale alert issue");
            self.registry.delete_issue(stale);
            removed += 1;
        }

        self.known = active_ids;
        debug!(
            active = self.known.len(),
            created, removed, "alert feed refresh complete"
        );

        Ok(RefreshOutcome {
            active: self.known.len(),
            created,
            removed,
            completed_at: Utc::now(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Refresh immediately, then on every `interval` tick until the task
    /// is cancelled. Failed cycles are logged and retried on the next tick.
    pub async fn run(&mut self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            if let Err(err) = self.refresh().await {
                warn!(error = %err, "alert feed refresh failed, keeping previous issues");
            }
        }
    }
}
