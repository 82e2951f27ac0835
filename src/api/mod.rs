pub mod middleware;
pub mod services;
pub mod types;
