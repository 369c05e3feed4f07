/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    API_BASE_URL, DEFAULT_LIMIT, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, warn};

const RATE_LIMIT_VARS: [&str; 3] = [
    "TDU_RATE_LIMIT_MAX_REQUESTS",
    "TDU_RATE_LIMIT_PERIOD_SECONDS",
    "TDU_RATE_LIMIT_BURST_SIZE",
];

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials for the TDU API
pub struct Credentials {
    /// API key sent in the `x-api-key` header
    pub api_key: String,
    /// User the content is fetched for (courses and preload)
    pub user_id: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the TDU API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client-side rate limiting; `None` lets every call go out immediately
    pub rate_limiter: Option<RateLimiterConfig>,
    /// Number of items to retrieve per page when the caller does not choose
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL all endpoint paths are appended to
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl RateLimiterConfig {
    /// Reads the `TDU_RATE_LIMIT_*` variables
    ///
    /// Returns `None` when none of them is set to a non-empty value.
    pub fn from_env() -> Option<Self> {
        let configured = RATE_LIMIT_VARS
            .iter()
            .any(|var| env::var(var).is_ok_and(|val| !val.trim().is_empty()));
        if !configured {
            return None;
        }

        Some(Self {
            max_requests: get_env_or_default(
                "TDU_RATE_LIMIT_MAX_REQUESTS",
                DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            ),
            period_seconds: get_env_or_default(
                "TDU_RATE_LIMIT_PERIOD_SECONDS",
                DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            ),
            burst_size: get_env_or_default(
                "TDU_RATE_LIMIT_BURST_SIZE",
                DEFAULT_RATE_LIMIT_BURST_SIZE,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, loading `.env` first
    ///
    /// Recognised variables: `TDU_API_KEY`, `TDU_USER_ID`, `TDU_REST_BASE_URL`,
    /// `TDU_REST_TIMEOUT`, `TDU_RATE_LIMIT_MAX_REQUESTS`,
    /// `TDU_RATE_LIMIT_PERIOD_SECONDS`, `TDU_RATE_LIMIT_BURST_SIZE` and
    /// `TDU_PAGE_SIZE`.
    ///
    /// Rate limiting stays off unless at least one `TDU_RATE_LIMIT_*`
    /// variable is set; unset ones then take their defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("TDU_API_KEY", String::new());
        if api_key.is_empty() {
            warn!("TDU_API_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                user_id: get_env_or_none("TDU_USER_ID"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TDU_REST_BASE_URL", API_BASE_URL.to_string()),
                timeout: get_env_or_none("TDU_REST_TIMEOUT"),
            },
            rate_limiter: RateLimiterConfig::from_env(),
            page_size: get_env_or_default("TDU_PAGE_SIZE", DEFAULT_LIMIT),
        }
    }

    /// Creates a configuration pointing at `base_url`, ignoring the environment
    ///
    /// Useful for tests and for talking to a staging deployment.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            credentials: Credentials::default(),
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: None,
            },
            rate_limiter: None,
            page_size: DEFAULT_LIMIT,
        }
    }
}
