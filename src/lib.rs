/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # TDU Client
//!
//! A client for the TDU admin content API. It wraps the paginated resource
//! endpoints (signals, channels, quizzes, news, courses, charity and gifts)
//! and the combined `tradingbot/start` preload endpoint behind a small set of
//! accessors.
//!
//! Every accessor performs exactly one GET request and always returns a fully
//! populated result: when the request fails or the response does not have the
//! expected shape, the result carries its empty defaults and the failure is
//! logged through `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tdu_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Config::new();
//! let api_key = config.credentials.api_key.clone();
//! let client = Client::new(config)?;
//!
//! let request = PageRequest::new().with_page(2).with_limit(5);
//! let signals = client.fetch_more_signals(&api_key, &request).await;
//! info!("{} signals, more: {}", signals.signal_data.len(), signals.signal_has_more);
//! # Ok(())
//! # }
//! ```

/// Client configuration, rate limiting and the content service
pub mod application;

/// Global constants
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Request and response models
pub mod model;

/// Convenience re-exports
pub mod prelude;

/// HTTP transport used by the accessors
pub mod transport;

/// Logging, configuration and identifier helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
