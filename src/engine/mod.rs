//! Alert filtering engine
//!
//! Deterministic reduction of fetched feed records to the active issue set:
//! same feed, component set, and platform version always produce the same
//! issues, regardless of record order.

mod versions;

pub use versions::*;

use std::collections::{HashMap, HashSet};

use semver::Version;

use crate::contracts::{AlertRecord, Issue};
use crate::error::{AgentError, Result};

/// Alert filtering engine
pub struct AlertEngine {
    platform_version: Version,
}

impl AlertEngine {
    /// Create an engine for the running platform version
    pub fn new(platform_version: &str) -> Result<Self> {
        let platform_version = versions::parse_lenient(platform_version).ok_or_else(|| {
            AgentError::invalid_input(format!(
                "invalid platform version '{}'",
                platform_version
            ))
        })?;

        Ok(Self { platform_version })
    }

    /// The running platform version
    pub fn platform_version(&self) -> &Version {
        &self.platform_version
    }

    /// Reduce feed records to the issues active for the loaded components.
    ///
    /// A record is dropped when its version range excludes the platform
    /// version; within a surviving record, only integrations present in
    /// `components` produce issues. Keyed by issue id, so duplicate
    /// (alert, integration) pairs collapse.
    pub fn active_issues(
        &self,
        records: &[AlertRecord],
        components: &HashSet<String>,
    ) -> HashMap<String, Issue> {
        let mut issues = HashMap::new();

        for record in records {
            if !versions::in_range(
                &self.platform_version,
                record.min_version.as_deref(),
                record.max_version.as_deref(),
            ) {
                tracing::debug!(
                    alert = %record.filename,
                    "alert does not apply to this platform version"
                );
                continue;
            }

            for integration in &record.integrations {
                if !components.contains(integration) {
                    continue;
                }

                let issue = Issue::from_alert(&record.filename, integration);
                issues.insert(issue.issue_id.clone(), issue);
            }
        }

        issues
    }
}
