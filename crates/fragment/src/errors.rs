use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not parse POM: {0}")]
    Pom(#[from] depmap_pom::PomError),

    #[error(transparent)]
    Resolve(#[from] depmap_resolver::ResolveError),

    #[error("Packaging type is not 'pom' and no artifact path has been provided for POM {0}")]
    PackagingTypeMissingFile(String),

    #[error("Malformed depmap '{0}': expected groupId:artifactId")]
    MalformedAlias(String),
}
