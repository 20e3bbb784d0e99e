use crate::UtilsError;
use std::path::Path;

/// Final component of a path as UTF-8
pub fn file_name(path: &Path) -> Result<&str, UtilsError> {
    let name = path
        .file_name()
        .ok_or_else(|| UtilsError::PathError(path.display().to_string()))?;

    name.to_str()
        .ok_or_else(|| UtilsError::PathConversionError(path.display().to_string()))
}

/// Joins archive entry components with `/` regardless of host separator
pub fn entry_path(components: &[&str]) -> String {
    components
        .iter()
        .map(|c| c.trim_matches('/'))
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_name() {
        let path = PathBuf::from("/usr/share/maven-poms/JPP.xbean-xbean-main.pom");
        assert_eq!(file_name(&path).unwrap(), "JPP.xbean-xbean-main.pom");

        assert!(matches!(file_name(Path::new("/")), Err(UtilsError::PathError(_))));
    }

    #[test]
    fn test_entry_path() {
        assert_eq!(
            entry_path(&["META-INF/maven", "org.apache", "xbean", "pom.properties"]),
            "META-INF/maven/org.apache/xbean/pom.properties"
        );
        assert_eq!(entry_path(&["/a/", "", "b"]), "a/b");
    }
}
