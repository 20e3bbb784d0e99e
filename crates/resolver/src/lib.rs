//! Local-identifier resolution.
//!
//! Ties a POM filename to the local `JPP` group/artifact pair and, when an
//! installed JAR is given, checks that the JAR's location below one of the
//! library roots agrees with the POM's name:
//!
//! | JAR below root          | required POM name          | local id                  |
//! |-------------------------|----------------------------|---------------------------|
//! | `xbean/xbean-main.jar`  | `JPP.xbean-xbean-main.pom` | `JPP/xbean`, `xbean-main` |
//! | `simple.jar`            | `JPP-simple.pom`           | `JPP`, `simple`           |

mod errors;
mod filename;
mod resolver;
mod roots;

pub use errors::ResolveError;
pub use filename::{expected_pom_name, local_id_from_pom_name};
pub use resolver::Resolver;
pub use roots::{local_id_from_jar_part, JavaDirs};
