use super::errors::ResolveError;
use super::filename::{expected_pom_name, local_id_from_pom_name};
use super::roots::{local_id_from_jar_part, JavaDirs};
use depmap_models::LocalId;
use depmap_pom::PomSource;
use depmap_utils::file_name;
use std::path::Path;

type Result<T> = std::result::Result<T, ResolveError>;

/// Maps a POM (and optionally its installed JAR) to the local JPP identifier
#[derive(Debug, Clone)]
pub struct Resolver {
    java_dirs: JavaDirs,
}

impl Resolver {
    pub fn new(java_dirs: JavaDirs) -> Self {
        Self { java_dirs }
    }

    pub fn resolve(&self, pom: &PomSource, jar_path: Option<&Path>) -> Result<LocalId> {
        match jar_path {
            Some(jar_path) => self.resolve_with_jar(pom, jar_path),
            None => Self::resolve_from_pom(pom),
        }
    }

    fn resolve_with_jar(&self, pom: &PomSource, jar_path: &Path) -> Result<LocalId> {
        if !jar_path.is_file() {
            return Err(ResolveError::JarNotFound(jar_path.display().to_string()));
        }

        let jar_str = jar_path.to_string_lossy();
        let (root, jar_part) = self
            .java_dirs
            .locate(&jar_str)
            .ok_or_else(|| ResolveError::MissingJarFile(jar_str.to_string()))?;

        let local = local_id_from_jar_part(jar_part, &jar_str)?;
        tracing::debug!("JAR {} below {} resolves to {}", jar_str, root, local);

        // Inline coordinates have no filename to cross-check
        if let PomSource::File(pom_path) = pom {
            let pom_name = file_name(pom_path)?;
            let expected = expected_pom_name(&local);
            if pom_name != expected {
                tracing::debug!("POM name {} differs from expected {}", pom_name, expected);
                return Err(ResolveError::IncompatibleFilenames {
                    pom: pom_path.display().to_string(),
                    jar: jar_str.to_string(),
                });
            }
        }

        Ok(local)
    }

    fn resolve_from_pom(pom: &PomSource) -> Result<LocalId> {
        match pom {
            PomSource::File(pom_path) => {
                let local = local_id_from_pom_name(file_name(pom_path)?)?;
                tracing::debug!("POM {} resolves to {}", pom_path.display(), local);
                Ok(local)
            }
            PomSource::Coordinate(coordinate) => Err(ResolveError::CoordinateWithoutJar(coordinate.clone())),
        }
    }
}
