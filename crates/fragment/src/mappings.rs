use super::errors::FragmentError;
use depmap_models::{Fragment, Mapping};

type Result<T> = std::result::Result<T, FragmentError>;

/// Primary mapping followed by the comma separated `groupId:artifactId` aliases
pub fn create_mappings(fragment: &Fragment, additions: Option<&str>) -> Result<Vec<Mapping>> {
    let mut mappings = vec![fragment.primary_mapping()];

    if let Some(additions) = additions.filter(|a| !a.is_empty()) {
        for alias in additions.split(',') {
            mappings.push(parse_alias(alias)?);
        }
    }

    Ok(mappings)
}

fn parse_alias(alias: &str) -> Result<Mapping> {
    let parts: Vec<&str> = alias.trim().split(':').collect();
    match parts.as_slice() {
        [group_id, artifact_id] if !group_id.is_empty() && !artifact_id.is_empty() => {
            Ok(Mapping::new(*group_id, *artifact_id))
        }
        _ => Err(FragmentError::MalformedAlias(alias.to_string())),
    }
}
