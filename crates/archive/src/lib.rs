mod append;
mod errors;
mod properties;

pub use append::{append_if_missing, append_if_missing_async, has_entry};
pub use errors::ArchiveError;
pub use properties::{inject_pom_properties, pom_properties, pom_properties_path, Injection};
