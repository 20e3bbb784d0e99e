use serde::{Deserialize, Serialize};
use std::fmt;

/// Group id prefix every local identifier lives under
pub const JPP_GROUP: &str = "JPP";

/// Upstream Maven artifact as read from a POM or a coordinate string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(default)]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
}

impl Artifact {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.trim().to_string(),
            artifact_id: artifact_id.trim().to_string(),
            extension: String::new(),
            classifier: String::new(),
            version: version.trim().to_string(),
            packaging: None,
        }
    }

    /// Only "pom" packaged artifacts may be mapped without a JAR
    pub fn is_pom_packaging(&self) -> bool {
        self.packaging.as_deref() == Some("pom")
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if !self.extension.is_empty() {
            write!(f, ":{}", self.extension)?;
        }
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        if !self.version.is_empty() {
            write!(f, ":{}", self.version)?;
        }
        Ok(())
    }
}

/// Local (JPP) group/artifact pair a mapping redirects to.
///
/// The group is either exactly `JPP` or `JPP/<segment>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalId {
    pub group_id: String,
    pub artifact_id: String,
}

impl LocalId {
    /// Artifact living directly in a library root
    pub fn root(artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: JPP_GROUP.to_string(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Artifact living in a one-level subdirectory of a library root
    pub fn nested(segment: &str, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: format!("{}/{}", JPP_GROUP, segment),
            artifact_id: artifact_id.into(),
        }
    }

    /// Subdirectory segment of the group, if any
    pub fn segment(&self) -> Option<&str> {
        self.group_id
            .strip_prefix(JPP_GROUP)
            .and_then(|rest| rest.strip_prefix('/'))
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// One upstream (groupId, artifactId) that resolves to the fragment's local id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub group_id: String,
    pub artifact_id: String,
}

impl Mapping {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

/// Resolved mapping record from an upstream coordinate to a local identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub local: LocalId,
}

impl Fragment {
    pub fn new(group_id: &str, artifact_id: &str, version: &str, local: LocalId) -> Self {
        Self {
            group_id: group_id.trim().to_string(),
            artifact_id: artifact_id.trim().to_string(),
            version: version.trim().to_string(),
            local,
        }
    }

    pub fn primary_mapping(&self) -> Mapping {
        Mapping::new(self.group_id.clone(), self.artifact_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_id_segment() {
        assert_eq!(LocalId::root("simple").segment(), None);
        assert_eq!(LocalId::nested("xbean", "xbean-main").segment(), Some("xbean"));
        assert_eq!(LocalId::nested("xbean", "xbean-main").group_id, "JPP/xbean");
    }

    #[test]
    fn test_fragment_trims_coordinates() {
        let fragment = Fragment::new(" org.apache ", "\txbean\n", " 3.7 ", LocalId::root("xbean"));
        assert_eq!(fragment.group_id, "org.apache");
        assert_eq!(fragment.artifact_id, "xbean");
        assert_eq!(fragment.version, "3.7");
        assert_eq!(fragment.primary_mapping(), Mapping::new("org.apache", "xbean"));
    }

    #[test]
    fn test_artifact_display() {
        let mut artifact = Artifact::new("g", "a", "1.0");
        assert_eq!(artifact.to_string(), "g:a:1.0");
        artifact.extension = "war".to_string();
        assert_eq!(artifact.to_string(), "g:a:war:1.0");
    }
}
