use super::errors::FragmentError;
use depmap_models::Fragment;
use depmap_pom::PomSource;
use depmap_resolver::Resolver;
use std::path::Path;

type Result<T> = std::result::Result<T, FragmentError>;

/// Reads the POM and resolves its local identifier into a fragment.
///
/// A JAR is mandatory unless the POM declares `pom` packaging.
pub async fn parse_pom(source: &PomSource, jar_path: Option<&Path>, resolver: &Resolver) -> Result<Fragment> {
    let artifact = source.load().await?;

    if jar_path.is_none() && !artifact.is_pom_packaging() {
        return Err(FragmentError::PackagingTypeMissingFile(source.to_string()));
    }

    let local = resolver.resolve(source, jar_path)?;
    tracing::debug!("{} maps to {}", artifact, local);

    Ok(Fragment::new(
        &artifact.group_id,
        &artifact.artifact_id,
        &artifact.version,
        local,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depmap_models::LocalId;
    use depmap_resolver::{JavaDirs, ResolveError};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PARENT_POM: &str = "<project><groupId>org.apache.xbean</groupId>\
        <artifactId>xbean</artifactId><version>3.7</version><packaging>pom</packaging></project>";

    const JAR_POM: &str = "<project><groupId> org.apache.xbean </groupId>\
        <artifactId>xbean-main</artifactId><version>3.7</version></project>";

    async fn setup(pom_name: &str, content: &str) -> (TempDir, PathBuf, Resolver) {
        let dir = tempfile::tempdir().unwrap();
        let pom_path = dir.path().join(pom_name);
        tokio::fs::write(&pom_path, content).await.unwrap();
        let root = dir.path().join("java");
        let resolver = Resolver::new(JavaDirs::new([root.to_string_lossy().to_string()]));
        (dir, pom_path, resolver)
    }

    #[tokio::test]
    async fn test_pom_packaging_without_jar() {
        let (_dir, pom_path, resolver) = setup("JPP.xbean-xbean.pom", PARENT_POM).await;

        let fragment = parse_pom(&PomSource::File(pom_path), None, &resolver).await.unwrap();
        assert_eq!(fragment.group_id, "org.apache.xbean");
        assert_eq!(fragment.artifact_id, "xbean");
        assert_eq!(fragment.version, "3.7");
        assert_eq!(fragment.local, LocalId::nested("xbean", "xbean"));
    }

    #[tokio::test]
    async fn test_jar_packaging_requires_jar() {
        let (_dir, pom_path, resolver) = setup("JPP.xbean-xbean-main.pom", JAR_POM).await;

        let result = parse_pom(&PomSource::File(pom_path), None, &resolver).await;
        assert!(matches!(result, Err(FragmentError::PackagingTypeMissingFile(_))));

        let coordinate = PomSource::from_arg("org.apache.xbean:xbean-main:3.7");
        let result = parse_pom(&coordinate, None, &resolver).await;
        assert!(matches!(result, Err(FragmentError::PackagingTypeMissingFile(_))));
    }

    #[tokio::test]
    async fn test_with_jar() {
        let (dir, pom_path, resolver) = setup("JPP.xbean-xbean-main.pom", JAR_POM).await;
        let jar = dir.path().join("java/xbean/xbean-main.jar");
        tokio::fs::create_dir_all(jar.parent().unwrap()).await.unwrap();
        tokio::fs::write(&jar, b"PK").await.unwrap();

        let source = PomSource::File(pom_path);
        let fragment = parse_pom(&source, Some(&jar), &resolver).await.unwrap();
        assert_eq!(fragment.group_id, "org.apache.xbean");
        assert_eq!(fragment.local, LocalId::nested("xbean", "xbean-main"));

        // Resolution has no side effects; a second run yields the same record
        let again = parse_pom(&source, Some(&jar), &resolver).await.unwrap();
        assert_eq!(fragment, again);
    }

    #[tokio::test]
    async fn test_errors_are_distinguished() {
        let (dir, pom_path, resolver) = setup("JPP-broken.pom", "<settings/>").await;
        let result = parse_pom(&PomSource::File(pom_path), None, &resolver).await;
        assert!(matches!(result, Err(FragmentError::Pom(_))));

        let jar = dir.path().join("java/other.jar");
        tokio::fs::create_dir_all(jar.parent().unwrap()).await.unwrap();
        tokio::fs::write(&jar, b"PK").await.unwrap();
        let pom_path = dir.path().join("JPP-simple.pom");
        tokio::fs::write(&pom_path, JAR_POM).await.unwrap();

        let result = parse_pom(&PomSource::File(pom_path), Some(&jar), &resolver).await;
        assert!(matches!(
            result,
            Err(FragmentError::Resolve(ResolveError::IncompatibleFilenames { .. }))
        ));
    }
}
