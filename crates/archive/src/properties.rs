use super::append::append_if_missing_async;
use super::errors::ArchiveError;
use depmap_models::Fragment;
use depmap_utils::{entry_path, properties_timestamp_now};
use std::path::Path;

type Result<T> = std::result::Result<T, ArchiveError>;

/// Outcome of a provenance injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub entry: String,
    pub written: bool,
}

/// `META-INF/maven/<groupId>/<artifactId>/pom.properties`
pub fn pom_properties_path(fragment: &Fragment) -> String {
    entry_path(&[
        "META-INF/maven",
        fragment.group_id.as_str(),
        fragment.artifact_id.as_str(),
        "pom.properties",
    ])
}

pub fn pom_properties(fragment: &Fragment, header: &str, timestamp: &str) -> String {
    format!(
        "#{}\n#{}\nversion={}\ngroupId={}\nartifactId={}\n",
        header, timestamp, fragment.version, fragment.group_id, fragment.artifact_id
    )
}

/// Writes `pom.properties` into the JAR unless it already carries one, so
/// the JAR's origin stays identifiable once installed.
pub async fn inject_pom_properties<P: AsRef<Path>>(jar_path: P, fragment: &Fragment, header: &str) -> Result<Injection> {
    let entry = pom_properties_path(fragment);
    let contents = pom_properties(fragment, header, &properties_timestamp_now());

    let written = append_if_missing_async(jar_path.as_ref(), &entry, contents.into_bytes()).await?;
    if !written {
        tracing::warn!("{} already present in {}", entry, jar_path.as_ref().display());
    }

    Ok(Injection { entry, written })
}
