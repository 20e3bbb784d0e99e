use super::errors::FragmentError;
use super::versions::VersionList;
use depmap_models::{Fragment, Mapping};
use quick_xml::escape::partial_escape;
use std::path::Path;
use tokio::io::AsyncWriteExt;

type Result<T> = std::result::Result<T, FragmentError>;

/// Marker telling the rpm dependency generator not to emit provides
pub const SKIP_PROVIDES: &str = "<skipProvides/>\n";

/// Renders one `<dependency>` record per (version, mapping) pair
pub fn render_fragment(fragment: &Fragment, mappings: &[Mapping], versions: &VersionList) -> String {
    let mut out = String::new();

    if versions.skip_provides() {
        out.push_str(SKIP_PROVIDES);
    }

    for version in versions.versions() {
        for mapping in mappings {
            let version = partial_escape(version.as_str());
            out.push_str(&format!(
                "
<dependency>
    <maven>
        <groupId>{}</groupId>
        <artifactId>{}</artifactId>
        <version>{}</version>
    </maven>
    <jpp>
        <groupId>{}</groupId>
        <artifactId>{}</artifactId>
        <version>{}</version>
    </jpp>
</dependency>
",
                partial_escape(mapping.group_id.as_str()),
                partial_escape(mapping.artifact_id.as_str()),
                version,
                partial_escape(fragment.local.group_id.as_str()),
                partial_escape(fragment.local.artifact_id.as_str()),
                version,
            ));
        }
    }

    out
}

/// Appends the rendered records to `path`, creating it if needed.
///
/// Returns the number of `<dependency>` records written.
pub async fn write_fragment<P: AsRef<Path>>(
    path: P,
    fragment: &Fragment,
    mappings: &[Mapping],
    versions: &VersionList,
) -> Result<usize> {
    let path = path.as_ref();
    let rendered = render_fragment(fragment, mappings, versions);

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(rendered.as_bytes()).await?;
    file.flush().await?;

    let records = versions.len() * mappings.len();
    tracing::info!("Appended {} depmap record(s) to {}", records, path.display());
    Ok(records)
}
