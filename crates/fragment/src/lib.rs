mod builder;
mod errors;
mod mappings;
mod versions;
mod writer;

pub use builder::parse_pom;
pub use errors::FragmentError;
pub use mappings::create_mappings;
pub use versions::VersionList;
pub use writer::{render_fragment, write_fragment, SKIP_PROVIDES};
