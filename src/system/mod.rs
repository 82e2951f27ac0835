//! System-level modules
//!
//! - Logging initialization (tracing subscriber, file rotation)
//! - Panic hook writing `crash.log`

pub mod logging;
pub mod panic_handler;

pub use logging::init_logging;
pub use panic_handler::{RunMode, install_panic_hook};
