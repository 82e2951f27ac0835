//! CLI command implementations

mod clean_dev;
mod config_gen;
mod validate;

pub use clean_dev::*;
pub use config_gen::*;
pub use validate::*;
