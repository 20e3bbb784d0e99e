use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("JAR path doesn't exist: {0}")]
    JarNotFound(String),

    #[error("JAR {0} seems to be missing in standard directories. Make sure you have installed it")]
    MissingJarFile(String),

    #[error("Filenames of POM {pom} and JAR {jar} does not match properly. Check that JAR subdirectories matches '.' in pom name.")]
    IncompatibleFilenames { pom: String, jar: String },

    #[error("POM filename '{0}' matches neither JPP.<group>-<artifact>.pom nor <prefix><artifact>.pom")]
    MalformedFilename(String),

    #[error("JAR {0} is nested more than one directory below its library root")]
    NestedJarDirectory(String),

    #[error("JAR name of {0} is too short to carry an extension")]
    MalformedJarName(String),

    #[error("Maven coordinate {0} carries no filename; a JAR path is required to resolve it")]
    CoordinateWithoutJar(String),

    #[error("Path error: {0}")]
    PathError(#[from] depmap_utils::UtilsError),
}
