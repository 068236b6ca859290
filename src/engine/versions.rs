//! Version-range applicability
//!
//! The platform and the feed both use calver-style version strings
//! (`2022.7.0`, sometimes `2022.7`). Comparison is semantic-version
//! ordering with missing components padded to zero.

use semver::Version;

/// Parse a version string, padding missing minor/patch components.
pub fn parse_lenient(version: &str) -> Option<Version> {
    let version = version.trim();
    if let Ok(parsed) = Version::parse(version) {
        return Some(parsed);
    }

    // Feed bounds occasionally omit components: "2022.7" or bare "2022"
    let parts: Vec<&str> = version.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => return None,
    };
    Version::parse(&padded).ok()
}

/// Whether `version` falls inside the optional inclusive `[min, max]` range.
///
/// A bound that fails to parse does not constrain.
pub fn in_range(version: &Version, min: Option<&str>, max: Option<&str>) -> bool {
    if let Some(raw) = min {
        match parse_lenient(raw) {
            Some(min) if *version < min => return false,
            Some(_) => {}
            None => tracing::debug!(bound = raw, "ignoring unparseable min version bound"),
        }
    }

    if let Some(raw) = max {
        match parse_lenient(raw) {
            Some(max) if *version > max => return false,
            Some(_) => {}
            None => tracing::debug!(bound = raw, "ignoring unparseable max version bound"),
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        parse_lenient(s).unwrap()
    }

    #[test]
    fn test_parse_lenient_pads_components() {
        assert_eq!(v("2022.7"), Version::new(2022, 7, 0));
        assert_eq!(v("2022"), Version::new(2022, 0, 0));
        assert_eq!(v("2022.7.1"), Version::new(2022, 7, 1));
        assert!(parse_lenient("not-a-version").is_none());
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        let version = v("2022.7.0");
        assert!(in_range(&version, Some("2022.7.0"), Some("2022.7.0")));
        assert!(in_range(&version, Some("2022.6.0"), Some("2022.8.0")));
        assert!(!in_range(&version, Some("2022.7.1"), None));
        assert!(!in_range(&version, None, Some("2022.6.9")));
    }

    #[test]
    fn test_in_range_missing_bounds_do_not_constrain() {
        let version = v("2021.10.0");
        assert!(in_range(&version, None, None));
        assert!(in_range(&version, None, Some("2022.8.0")));
        assert!(in_range(&version, Some("2021.1.0"), None));
    }

    #[test]
    fn test_in_range_unparseable_bound_ignored() {
        let version = v("2022.7.0");
        assert!(in_range(&version, Some("garbage"), None));
        assert!(in_range(&version, Some("garbage"), Some("2022.8.0")));
        assert!(!in_range(&version, Some("garbage"), Some("2022.6.0")));
    }

    #[test]
    fn test_calver_ordering() {
        assert!(v("2021.10.0") < v("2022.7.0"));
        assert!(v("2022.7.0") < v("2022.8"));
    }
}
