//! Service layer
//!
//! Logic shared by the HTTP handlers and the CLI: the simulated contact
//! submission, catalog search and the performance table.

mod contact;
mod performance;
mod search;

pub use contact::{ContactReceipt, ContactService};
pub use performance::PerformanceMonitor;
pub use search::{SearchResults, search};
