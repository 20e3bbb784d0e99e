/// Versions each mapping is emitted for, the fragment's own version first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<String>,
    skip_provides: bool,
}

impl VersionList {
    /// Any `extra` value, even an empty one, marks the fragment as a compat
    /// package that must not generate RPM provides.
    pub fn new(own_version: &str, extra: Option<&str>) -> Self {
        let mut versions = vec![own_version.to_string()];

        if let Some(extra) = extra.filter(|e| !e.is_empty()) {
            versions.extend(extra.split(',').map(str::to_string));
        }

        Self {
            versions,
            skip_provides: extra.is_some(),
        }
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn skip_provides(&self) -> bool {
        self.skip_provides
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_version_only() {
        let list = VersionList::new("3.7", None);
        assert_eq!(list.versions(), &["3.7".to_string()]);
        assert!(!list.skip_provides());
    }

    #[test]
    fn test_explicit_empty_extra() {
        let list = VersionList::new("3.7", Some(""));
        assert_eq!(list.len(), 1);
        assert!(list.skip_provides());
    }

    #[test]
    fn test_extra_versions_keep_order_and_duplicates() {
        let list = VersionList::new("3.7", Some("3,3.7,3"));
        assert_eq!(list.versions(), &["3.7", "3", "3.7", "3"].map(String::from));
        assert!(list.skip_provides());
    }
}
