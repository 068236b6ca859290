//! Alert feed wire types
//!
//! Records published by the remote alerts feed. The feed is a JSON array of
//! loosely-shaped objects, so parsing is lenient: a malformed record is
//! skipped and logged, never fatal to the whole document.

use serde_json::Value;

/// One alert record from the remote feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    /// Feed filename, e.g. `dark_sky.markdown`
    pub filename: String,

    /// Integration domains affected by this alert
    pub integrations: Vec<String>,

    /// Minimum affected platform version (inclusive)
    pub min_version: Option<String>,

    /// Maximum affected platform version (inclusive)
    pub max_version: Option<String>,
}

impl AlertRecord {
    /// Parse a single feed element.
    ///
    /// Returns `None` for records missing a filename, missing an
    /// alert URL, missing an integrations field, or resolving to zero
    /// integrations. The
    /// integrations field may be a single string, a list of strings, or a
    /// list of objects carrying a `package` key; object entries without
    /// `package` are dropped individually.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(record) = value.as_object() else {
            tracing::warn!("skipping non-object alert record");
            return None;
        };

        let Some(filename) = record.get("filename").and_then(Value::as_str) else {
            tracing::warn!("skipping alert record without filename");
            return None;
        };

        if record.get("alert_url").and_then(Value::as_str).is_none() {
            tracing::warn!(alert = filename, "skipping alert record without alert_url");
            return None;
        }

        let Some(raw_integrations) = record.get("integrations") else {
            tracing::warn!(alert = filename, "skipping alert record without integrations");
            return None;
        };

        let integrations = Self::resolve_integrations(filename, raw_integrations);
        if integrations.is_empty() {
            tracing::warn!(alert = filename, "skipping alert record with no usable integrations");
            return None;
        }

        let range = record.get("homeassistant").and_then(Value::as_object);
        let bound = |key: &str| {
            range
                .and_then(|r| r.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Some(Self {
            filename: filename.to_string(),
            integrations,
            min_version: bound("min"),
            max_version: bound("max"),
        })
    }

    fn resolve_integrations(filename: &str, value: &Value) -> Vec<String> {
        match value {
            Value::String(name) => vec![name.clone()],
            Value::Array(entries) => entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(name) => Some(name.clone()),
                    Value::Object(obj) => match obj.get("package").and_then(Value::as_str) {
                        Some(package) => Some(package.to_string()),
                        None => {
                            tracing::warn!(
                                alert = filename,
                                "skipping integration entry without package"
                            );
                            None
                        }
                    },
                    _ => {
                        tracing::warn!(alert = filename, "skipping malformed integration entry");
                        None
                    }
                })
                .collect(),
            _ => {
                tracing::warn!(alert = filename, "skipping malformed integrations field");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_list_form() {
        let value = json!({
            "filename": "dark_sky.markdown",
            "integrations": [{"package": "darksky"}],
            "homeassistant": {"min": "2022.6.0", "max": "2022.8.0"},
            "alert_url": "https://alerts.home-assistant.io/#dark_sky.markdown",
        });

        let record = AlertRecord::from_value(&value).unwrap();
        assert_eq!(record.filename, "dark_sky.markdown");
        assert_eq!(record.integrations, vec!["darksky"]);
        assert_eq!(record.min_version.as_deref(), Some("2022.6.0"));
        assert_eq!(record.max_version.as_deref(), Some("2022.8.0"));
    }

    #[test]
    fn test_parse_single_string_form() {
        let value = json!({
            "filename": "neato.markdown",
            "integrations": "neato",
            "alert_url": "https://alerts.home-assistant.io/#neato.markdown",
        });

        let record = AlertRecord::from_value(&value).unwrap();
        assert_eq!(record.integrations, vec!["neato"]);
        assert!(record.min_version.is_none());
        assert!(record.max_version.is_none());
    }

    #[test]
    fn test_parse_string_list_form() {
        let value = json!({
            "filename": "hikvision.markdown",
            "integrations": ["hikvision", "hikvisioncam"],
            "alert_url": "https://alerts.home-assistant.io/#hikvision.markdown",
        });

        let record = AlertRecord::from_value(&value).unwrap();
        assert_eq!(record.integrations, vec!["hikvision", "hikvisioncam"]);
    }

    #[test]
    fn test_missing_filename_is_skipped() {
        let value = json!({"integrations": ["darksky"]});
        assert!(AlertRecord::from_value(&value).is_none());
    }

    #[test]
    fn test_missing_integrations_is_skipped() {
        let value = json!({
            "filename": "dark_sky.markdown",
            "alert_url": "https://alerts.home-assistant.io/#dark_sky.markdown",
        });
        assert!(AlertRecord::from_value(&value).is_none());
    }

    #[test]
    fn test_missing_alert_url_is_skipped() {
        let value = json!({
            "filename": "sochain.markdown",
            "integrations": [{"package": "sochain"}],
        });
        assert!(AlertRecord::from_value(&value).is_none());
    }

    #[test]
    fn test_entries_without_package_are_dropped() {
        let value = json!({
            "filename": "hikvision.markdown",
            "integrations": [{"package": "hikvision"}, {"note": "no package here"}],
            "alert_url": "https://alerts.home-assistant.io/#hikvision.markdown",
        });

        let record = AlertRecord::from_value(&value).unwrap();
        assert_eq!(record.integrations, vec!["hikvision"]);
    }

    #[test]
    fn test_all_entries_unusable_skips_record() {
        let value = json!({
            "filename": "hikvision.markdown",
            "integrations": [{"note": "no package here"}],
            "alert_url": "https://alerts.home-assistant.io/#hikvision.markdown",
        });
        assert!(AlertRecord::from_value(&value).is_none());
    }
}
