use clap::Parser;
use std::path::PathBuf;

/// Maps a Maven POM (and its installed JAR) to a JPP depmap fragment
#[derive(Parser, Debug, Clone)]
#[command(name = "depmap", version)]
pub struct Cli {
    /// Fragment file the depmap records are appended to
    pub fragment_path: String,

    /// POM file, or an inline groupId:artifactId[:version] coordinate
    pub pom_path: String,

    /// Installed JAR; required unless the POM has pom packaging
    pub jar_path: Option<String>,

    /// Additional depmaps to add (gid:aid,gid:aid,...)
    #[arg(short = 'a', long)]
    pub append: Option<String>,

    /// Additional versions to add for each depmap (an empty value still skips RPM provides)
    #[arg(short = 'r', long)]
    pub versions: Option<String>,

    /// Configuration file; built-in defaults are used when it does not exist
    #[arg(long, env = "DEPMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not echo paths and progress to stdout
    #[arg(short, long)]
    pub quiet: bool,
}
