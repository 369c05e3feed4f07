/// Module containing environment configuration helpers
pub mod config;
/// Module containing request identifier and key masking helpers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;
