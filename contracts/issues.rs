//! Resolution-center issue types
//!
//! An issue is the user-visible artifact of an active alert. Its identifier
//! is a deterministic composite of the alert slug and the integration name,
//! so repeated refreshes update in place instead of duplicating.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base URL of the published alerts site
pub const ALERTS_BASE_URL: &str = "https://alerts.home-assistant.io";

/// Translation key carried by every alert-derived issue
pub const ALERT_TRANSLATION_KEY: &str = "alert";

/// A resolution-center issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Deterministic identifier: `{filename}_{integration}`
    pub issue_id: String,

    /// Issue severity
    pub severity: IssueSeverity,

    /// Whether the resolution center can offer an automated fix
    pub is_fixable: bool,

    /// Deep link to the published alert
    pub learn_more_url: String,

    /// Translation key for the user-visible message
    pub translation_key: String,

    /// Placeholders substituted into the translated message
    pub translation_placeholders: HashMap<String, String>,
}

impl Issue {
    /// Build the issue for one (alert, integration) pair.
    ///
    /// Alert-derived issues are always warnings and never fixable; the user
    /// resolves them by following the learn-more link.
    pub fn from_alert(filename: &str, integration: &str) -> Self {
        Self {
            issue_id: format!("{}_{}", filename, integration),
            severity: IssueSeverity::Warning,
            is_fixable: false,
            learn_more_url: learn_more_url(filename),
            translation_key: ALERT_TRANSLATION_KEY.to_string(),
            translation_placeholders: [("integration".to_string(), integration.to_string())]
                .into_iter()
                .collect(),
        }
    }
}

/// Issue severity levels understood by the resolution center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    /// Requires immediate attention
    Critical,
    /// Something is broken
    Error,
    /// Something may be broken
    Warning,
}

impl IssueSeverity {
    /// Wire/display label for the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "critical",
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        }
    }
}

/// Build the learn-more deep link for an alert slug.
///
/// The published site anchors on the slug without its file extension:
/// `dark_sky.markdown` links to `https://alerts.home-assistant.io/#dark_sky`.
pub fn learn_more_url(filename: &str) -> String {
    let slug = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    format!("{}/#{}", ALERTS_BASE_URL, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_id_composition() {
        let issue = Issue::from_alert("dark_sky.markdown", "darksky");
        assert_eq!(issue.issue_id, "dark_sky.markdown_darksky");
    }

    #[test]
    fn test_issue_defaults() {
        let issue = Issue::from_alert("dark_sky.markdown", "darksky");
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert!(!issue.is_fixable);
        assert_eq!(issue.translation_key, "alert");
        assert_eq!(
            issue.translation_placeholders.get("integration").unwrap(),
            "darksky"
        );
    }

    #[test]
    fn test_learn_more_url_strips_extension() {
        assert_eq!(
            learn_more_url("dark_sky.markdown"),
            "https://alerts.home-assistant.io/#dark_sky"
        );
        assert_eq!(
            learn_more_url("no_extension"),
            "https://alerts.home-assistant.io/#no_extension"
        );
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&IssueSeverity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_severity_labels_match_wire_form() {
        for severity in [
            IssueSeverity::Critical,
            IssueSeverity::Error,
            IssueSeverity::Warning,
        ] {
            let json = serde_json::to_string(&severity).unwrap();
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
        }
    }
}
