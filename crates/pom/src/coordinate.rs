use super::errors::PomError;
use depmap_models::Artifact;

type Result<T> = std::result::Result<T, PomError>;

/// Parses `groupId:artifactId[:extension[:classifier]][:version]`
pub fn parse_coordinate(mvn_str: &str) -> Result<Artifact> {
    let parts: Vec<&str> = mvn_str.trim().split(':').map(str::trim).collect();

    let (group_id, artifact_id, extension, classifier, version) = match parts.as_slice() {
        [g, a] => (*g, *a, "", "", ""),
        [g, a, v] => (*g, *a, "", "", *v),
        [g, a, e, v] => (*g, *a, *e, "", *v),
        [g, a, e, c, v] => (*g, *a, *e, *c, *v),
        _ => return Err(PomError::InvalidCoordinate(mvn_str.to_string())),
    };

    if group_id.is_empty() || artifact_id.is_empty() {
        return Err(PomError::InvalidCoordinate(mvn_str.to_string()));
    }

    let mut artifact = Artifact::new(group_id, artifact_id, version);
    artifact.extension = extension.to_string();
    artifact.classifier = classifier.to_string();
    Ok(artifact)
}
