pub mod path;
pub mod time;
pub mod errors;

pub use path::*;
pub use time::*;
pub use errors::*;
