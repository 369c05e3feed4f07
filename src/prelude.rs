/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # TDU Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tdu_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::from_env()?;
//! let gifts = client.fetch_more_gifts("api-key", &PageRequest::new()).await;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TDU API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Content client
pub use crate::application::client::Client;

/// Content service trait with the accessors
pub use crate::application::interfaces::content::ContentService;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and its reqwest implementation
pub use crate::transport::http_client::{HttpClient, HttpTransport};

// ============================================================================
// MODELS
// ============================================================================

/// Requests
pub use crate::model::requests::{PageRequest, PreloadRequest};

/// Endpoints
pub use crate::model::resource::Resource;

/// Page results
pub use crate::model::pages::{
    ChannelPage, CharityPage, CourseMeta, CoursePage, CourseSection, GiftPage, NewsPage,
    PreloadData, QuizPage, ResultPage, SignalPage,
};
pub use crate::model::responses::PageResult;

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom transport implementations
pub use reqwest::Method;
