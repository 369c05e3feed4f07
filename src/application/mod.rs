/// Content client implementing the accessors
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
