use super::coordinate::parse_coordinate;
use super::errors::PomError;
use super::reader::Pom;
use depmap_models::Artifact;
use std::fmt;
use std::path::PathBuf;

/// The POM argument: either an inline Maven coordinate or a POM file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PomSource {
    Coordinate(String),
    File(PathBuf),
}

impl PomSource {
    /// Anything containing `:` is taken as a coordinate
    pub fn from_arg(arg: &str) -> Self {
        let arg = arg.trim();
        if arg.contains(':') {
            Self::Coordinate(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub async fn load(&self) -> Result<Artifact, PomError> {
        match self {
            Self::Coordinate(coordinate) => parse_coordinate(coordinate),
            Self::File(path) => Pom::from_file(path).await?.into_artifact(),
        }
    }
}

impl fmt::Display for PomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate(coordinate) => f.write_str(coordinate),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg() {
        assert_eq!(
            PomSource::from_arg(" org.foo:bar:1.0 "),
            PomSource::Coordinate("org.foo:bar:1.0".to_string())
        );
        assert_eq!(
            PomSource::from_arg("/usr/share/maven-poms/JPP-bar.pom"),
            PomSource::File(PathBuf::from("/usr/share/maven-poms/JPP-bar.pom"))
        );
    }

    #[tokio::test]
    async fn test_load_coordinate() {
        let artifact = PomSource::from_arg("org.foo:bar:1.0").load().await.unwrap();
        assert_eq!(artifact.group_id, "org.foo");
        assert_eq!(artifact.artifact_id, "bar");
        assert!(!artifact.is_pom_packaging());
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("JPP-bar.pom");
        tokio::fs::write(
            &path,
            "<project><groupId>org.foo</groupId><artifactId>bar</artifactId>\
             <version>1.0</version><packaging>pom</packaging></project>",
        )
        .await
        .unwrap();

        let artifact = PomSource::from_arg(path.to_str().unwrap()).load().await.unwrap();
        assert_eq!(artifact.to_string(), "org.foo:bar:1.0");
        assert!(artifact.is_pom_packaging());

        let missing = PomSource::File(dir.path().join("JPP-missing.pom")).load().await;
        assert!(matches!(missing, Err(PomError::IoError(_))));
    }
}
