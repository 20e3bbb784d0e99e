use depmap_events::{AppEvent, EventBus};
use depmap_config::Config;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub async fn load(config_path: Option<&Path>, events: &Arc<EventBus>) -> Result<Config> {
    let (config, loaded) = Config::load_or_default(config_path).await?;

    match config_path {
        Some(path) if loaded => events.emit(AppEvent::ConfigLoaded {
            path: path.display().to_string(),
            roots: config.resolver.java_dirs.len(),
        }),
        _ => events.emit(AppEvent::ConfigDefaulted),
    }

    Ok(config)
}
