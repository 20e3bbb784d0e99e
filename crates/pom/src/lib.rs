mod coordinate;
mod errors;
mod reader;
mod source;

pub use coordinate::parse_coordinate;
pub use errors::PomError;
pub use reader::Pom;
pub use source::PomSource;
