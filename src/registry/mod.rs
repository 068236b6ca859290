//! Issue registry seam
//!
//! The durable resolution-center registry is an external platform service;
//! this trait is the boundary the poller reconciles against. The in-memory
//! implementation backs the CLI and tests.

use std::collections::HashMap;

use crate::contracts::Issue;

/// Registry of user-visible issues
pub trait IssueRegistry: Send {
    /// Create the issue, or update it in place if the id already exists
    fn create_issue(&mut self, issue: Issue);

    /// Remove the issue. Removing an unknown id is a no-op.
    fn delete_issue(&mut self, issue_id: &str);

    /// Snapshot of the currently registered issues, ordered by id
    fn issues(&self) -> Vec<Issue>;
}

/// In-memory issue registry
#[derive(Debug, Default)]
pub struct InMemoryIssueRegistry {
    issues: HashMap<String, Issue>,
}

impl InMemoryIssueRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the registry holds no issues
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IssueRegistry for InMemoryIssueRegistry {
    fn create_issue(&mut self, issue: Issue) {
        self.issues.insert(issue.issue_id.clone(), issue);
    }

    fn delete_issue(&mut self, issue_id: &str) {
        self.issues.remove(issue_id);
    }

    fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self.issues.values().cloned().collect();
        issues.sort_by(|a, b| a.issue_id.cmp(&b.issue_id));
        issues
    }
}
