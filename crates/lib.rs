// Re-export all public APIs from the workspace crates

pub use depmap_models::*;
pub use depmap_events::*;
pub use depmap_utils::*;
pub use depmap_config::*;
pub use depmap_pom::*;
pub use depmap_resolver::*;
pub use depmap_fragment::*;
pub use depmap_archive::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use depmap_models::{Artifact, Fragment, LocalId, Mapping};

    // Events
    pub use depmap_events::{AppEvent, EventBus};

    // Configuration
    pub use depmap_config::Config;

    // POM input
    pub use depmap_pom::{Pom, PomSource};

    // Resolution
    pub use depmap_resolver::{JavaDirs, Resolver};

    // Output
    pub use depmap_fragment::{create_mappings, parse_pom, write_fragment, VersionList};
    pub use depmap_archive::inject_pom_properties;
}
