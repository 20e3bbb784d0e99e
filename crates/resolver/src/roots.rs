use super::errors::ResolveError;
use depmap_models::LocalId;

type Result<T> = std::result::Result<T, ResolveError>;

/// Ordered set of library roots JARs are installed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaDirs {
    roots: Vec<String>,
}

impl JavaDirs {
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots: roots
                .into_iter()
                .map(Into::into)
                .map(|root: String| root.trim_end_matches('/').to_string())
                .filter(|root| !root.is_empty())
                .collect(),
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Splits `jar_path` into the first matching root and the part below it.
    ///
    /// A root matches when `<root>/` occurs anywhere in the path; the part is
    /// whatever follows its last occurrence.
    pub fn locate<'a>(&'a self, jar_path: &'a str) -> Option<(&'a str, &'a str)> {
        self.roots.iter().find_map(|root| {
            let marker = format!("{}/", root);
            jar_path
                .rfind(&marker)
                .map(|idx| (root.as_str(), &jar_path[idx + marker.len()..]))
        })
    }
}

/// Derives the local identifier from the path of a JAR below its root
pub fn local_id_from_jar_part(jar_part: &str, jar_path: &str) -> Result<LocalId> {
    let components: Vec<&str> = jar_part.split('/').filter(|c| !c.is_empty()).collect();

    let (segment, jar_name) = match components.as_slice() {
        [name] => (None, *name),
        [dir, name] => (Some(*dir), *name),
        [] => return Err(ResolveError::MalformedJarName(jar_path.to_string())),
        _ => return Err(ResolveError::NestedJarDirectory(jar_path.to_string())),
    };

    // The extension is the last four characters, ".jar" in practice
    let artifact_id = match jar_name.char_indices().rev().nth(3) {
        Some((idx, _)) if idx > 0 => &jar_name[..idx],
        _ => return Err(ResolveError::MalformedJarName(jar_path.to_string())),
    };

    Ok(match segment {
        Some(segment) => LocalId::nested(segment, artifact_id),
        None => LocalId::root(artifact_id),
    })
}
