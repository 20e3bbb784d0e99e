use super::errors::ConfigError;
use super::models::Config;
use std::path::Path;

type Result<T> = std::result::Result<T, ConfigError>;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml(&content)?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    ///
    /// The flag tells whether a file was actually read.
    pub async fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<(Self, bool)> {
        match path {
            Some(path) if path.as_ref().exists() => Ok((Self::from_file(path).await?, true)),
            _ => Ok((Self::default(), false)),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        if self.resolver.java_dirs.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "resolver.java_dirs must list at least one directory".to_string(),
            ));
        }

        for dir in &mut self.resolver.java_dirs {
            if !dir.starts_with('/') {
                return Err(ConfigError::InvalidConfig(format!(
                    "resolver.java_dirs entry '{}' is not absolute",
                    dir
                )));
            }
            // "/usr/share/java/" and "/usr/share/java" are the same root
            while dir.len() > 1 && dir.ends_with('/') {
                dir.pop();
            }
        }

        Ok(())
    }
}
