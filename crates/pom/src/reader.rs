use super::errors::PomError;
use depmap_models::Artifact;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

type Result<T> = std::result::Result<T, PomError>;

/// Coordinates read from a single POM file.
///
/// Only the project's own elements are read. Missing `groupId`/`version`
/// fall back to the `<parent>` block of the same file; the parent POM
/// itself is never loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent_group_id: Option<String>,
    pub parent_version: Option<String>,
}

impl Pom {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        let pom = Self::parse(&content)?;
        tracing::debug!("Parsed POM {}", path.as_ref().display());
        Ok(pom)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut pom = Pom::default();
        let mut stack: Vec<String> = Vec::new();
        let mut seen_root = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    if !seen_root {
                        if name != "project" {
                            return Err(PomError::NotAPom(name));
                        }
                        seen_root = true;
                    }
                    stack.push(name);
                }
                Event::Empty(e) if !seen_root => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    return Err(PomError::NotAPom(name));
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| PomError::Malformed(e.to_string()))?;
                    pom.capture(&stack, &text);
                }
                Event::CData(t) => {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    pom.capture(&stack, &text);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(PomError::Malformed("document has no root element".to_string()));
        }

        Ok(pom)
    }

    fn capture(&mut self, stack: &[String], text: &str) {
        let slot = match stack {
            [root, field] if root == "project" => match field.as_str() {
                "groupId" => &mut self.group_id,
                "artifactId" => &mut self.artifact_id,
                "version" => &mut self.version,
                "packaging" => &mut self.packaging,
                _ => return,
            },
            [root, parent, field] if root == "project" && parent == "parent" => match field.as_str() {
                "groupId" => &mut self.parent_group_id,
                "version" => &mut self.parent_version,
                _ => return,
            },
            _ => return,
        };

        slot.get_or_insert_with(String::new).push_str(text);
    }

    pub fn effective_group_id(&self) -> Option<&str> {
        non_empty(&self.group_id).or_else(|| non_empty(&self.parent_group_id))
    }

    pub fn effective_version(&self) -> Option<&str> {
        non_empty(&self.version).or_else(|| non_empty(&self.parent_version))
    }

    /// Converts into an artifact, requiring groupId and artifactId
    pub fn into_artifact(self) -> Result<Artifact> {
        let group_id = self
            .effective_group_id()
            .ok_or(PomError::MissingElement("groupId"))?;
        let artifact_id = non_empty(&self.artifact_id).ok_or(PomError::MissingElement("artifactId"))?;
        let version = self.effective_version().unwrap_or_default();

        let mut artifact = Artifact::new(group_id, artifact_id, version);
        artifact.packaging = non_empty(&self.packaging).map(str::to_string);
        Ok(artifact)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XBEAN_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.apache.xbean</groupId>
    <artifactId>xbean</artifactId>
    <version>3.7</version>
  </parent>
  <artifactId>xbean-main</artifactId>
  <packaging>bundle</packaging>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.8</version>
    </dependency>
  </dependencies>
</project>
"#;

    #[test]
    fn test_parent_fallback() {
        let pom = Pom::parse(XBEAN_POM).unwrap();
        assert_eq!(pom.group_id, None);
        assert_eq!(pom.effective_group_id(), Some("org.apache.xbean"));
        assert_eq!(pom.effective_version(), Some("3.7"));

        let artifact = pom.into_artifact().unwrap();
        assert_eq!(artifact.group_id, "org.apache.xbean");
        assert_eq!(artifact.artifact_id, "xbean-main");
        assert_eq!(artifact.version, "3.7");
        assert_eq!(artifact.packaging.as_deref(), Some("bundle"));
    }

    #[test]
    fn test_own_elements_win_and_dependencies_ignored() {
        let pom = Pom::parse(
            "<project><parent><groupId>p</groupId><version>1</version></parent>\
             <groupId>own</groupId><artifactId>a</artifactId><version>2</version>\
             <packaging>pom</packaging>\
             <dependencies><dependency><groupId>x</groupId></dependency></dependencies></project>",
        )
        .unwrap();

        let artifact = pom.into_artifact().unwrap();
        assert_eq!(artifact.group_id, "own");
        assert_eq!(artifact.version, "2");
        assert!(artifact.is_pom_packaging());
    }

    #[test]
    fn test_escaped_text() {
        let pom = Pom::parse("<project><groupId>a&amp;b</groupId><artifactId>c</artifactId></project>").unwrap();
        assert_eq!(pom.group_id.as_deref(), Some("a&b"));
    }

    #[test]
    fn test_missing_elements() {
        let pom = Pom::parse("<project><groupId>g</groupId></project>").unwrap();
        assert!(matches!(pom.into_artifact(), Err(PomError::MissingElement("artifactId"))));

        let pom = Pom::parse("<project><artifactId>a</artifactId></project>").unwrap();
        assert!(matches!(pom.into_artifact(), Err(PomError::MissingElement("groupId"))));
    }

    #[test]
    fn test_version_may_be_empty() {
        let artifact = Pom::parse("<project><groupId>g</groupId><artifactId>a</artifactId></project>")
            .unwrap()
            .into_artifact()
            .unwrap();
        assert_eq!(artifact.version, "");
        assert_eq!(artifact.packaging, None);
    }

    #[test]
    fn test_not_a_pom() {
        assert!(matches!(Pom::parse("<settings><x/></settings>"), Err(PomError::NotAPom(name)) if name == "settings"));
        assert!(matches!(Pom::parse(""), Err(PomError::Malformed(_))));
        assert!(Pom::parse("<project><groupId>g</artifactId></project>").is_err());
    }

    #[tokio::test]
    async fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("JPP.xbean-xbean-main.pom");
        tokio::fs::write(&path, XBEAN_POM).await.unwrap();

        let pom = Pom::from_file(&path).await.unwrap();
        assert_eq!(pom.artifact_id.as_deref(), Some("xbean-main"));

        let missing = Pom::from_file(dir.path().join("missing.pom")).await;
        assert!(matches!(missing, Err(PomError::IoError(_))));
    }
}
