use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Invocation
    FragmentPath { path: String },
    PomPath { path: String },
    JarPath { path: String },

    // Configuration
    ConfigLoaded { path: String, roots: usize },
    ConfigDefaulted,

    // Resolution
    FragmentResolved { upstream: String, local: String },

    // Provenance
    PropertiesInjected { jar: String, entry: String },
    PropertiesPresent { jar: String, entry: String },

    // Output
    FragmentWritten { path: String, records: usize },

    // Errors
    PomUnparseable { pom: String, bug_tracker: String },
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) quiet: bool,
}
