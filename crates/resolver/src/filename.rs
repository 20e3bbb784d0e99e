use super::errors::ResolveError;
use depmap_models::LocalId;
use regex::Regex;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, ResolveError>;

/// `JPP.<group>-<artifact>.pom`, the group segment ends at the first `-`
fn nested_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^JPP\.(?P<group>[^-]+)-(?P<artifact>.+)\.pom$").expect("valid nested POM pattern")
    })
}

/// `<4-char prefix><artifact>.pom`, usually `JPP-<artifact>.pom`
fn root_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^.{4}(?P<artifact>.+)\.pom$").expect("valid root POM pattern"))
}

/// Derives the local identifier from a POM filename alone
pub fn local_id_from_pom_name(pom_name: &str) -> Result<LocalId> {
    if pom_name.starts_with("JPP.") {
        let captures = nested_pattern()
            .captures(pom_name)
            .ok_or_else(|| ResolveError::MalformedFilename(pom_name.to_string()))?;
        return Ok(LocalId::nested(&captures["group"], &captures["artifact"]));
    }

    root_pattern()
        .captures(pom_name)
        .map(|captures| LocalId::root(&captures["artifact"]))
        .ok_or_else(|| ResolveError::MalformedFilename(pom_name.to_string()))
}

/// POM filename a JAR with the given local identifier must be paired with
pub fn expected_pom_name(local: &LocalId) -> String {
    match local.segment() {
        Some(segment) => format!("JPP.{}-{}.pom", segment, local.artifact_id),
        None => format!("JPP-{}.pom", local.artifact_id),
    }
}
