use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "super::defaults::resolver_settings")]
    pub resolver: ResolverSettings,
    #[serde(default = "super::defaults::output_settings")]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverSettings {
    #[serde(default = "super::defaults::java_dirs")]
    pub java_dirs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default = "super::defaults::bug_tracker_url")]
    pub bug_tracker_url: String,
    #[serde(default = "super::defaults::properties_header")]
    pub properties_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: super::defaults::resolver_settings(),
            output: super::defaults::output_settings(),
        }
    }
}
