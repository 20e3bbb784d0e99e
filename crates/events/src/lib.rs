mod bus;
mod models;

pub use models::*;
