/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{API_KEY_HEADER, CONTENT_TYPE_JSON, USER_AGENT};
use crate::error::AppError;
use crate::utils::id::{mask_api_key, request_id};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Performs one authenticated request and returns the parsed JSON body
///
/// Implementations log every failure where it happens and hand it back as an
/// [`AppError`]; they never retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `method` to `url` with `api_key` in the `x-api-key` header
    async fn fetch_json(&self, url: &str, api_key: &str, method: Method)
    -> Result<Value, AppError>;

    /// Sends a GET request
    async fn get_json(&self, url: &str, api_key: &str) -> Result<Value, AppError> {
        self.fetch_json(url, api_key, Method::GET).await
    }
}

/// reqwest-backed transport with optional client-side rate limiting
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    rate_limiter: Option<Arc<RateLimiter>>,
}

impl HttpClient {
    /// Creates a transport from configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            http_client: builder.build()?,
            rate_limiter: config
                .rate_limiter
                .as_ref()
                .map(|limits| Arc::new(RateLimiter::new(limits))),
        })
    }

    /// Gets the rate limiter shared by every request of this transport, if
    /// rate limiting was configured
    pub fn rate_limiter(&self) -> Option<&RateLimiter> {
        self.rate_limiter.as_deref()
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn fetch_json(
        &self,
        url: &str,
        api_key: &str,
        method: Method,
    ) -> Result<Value, AppError> {
        make_http_request(
            &self.http_client,
            self.rate_limiter(),
            method,
            url,
            api_key,
        )
        .await
    }
}

/// Makes an HTTP request and parses the body as JSON
///
/// Waits on the rate limiter when one is given, sends `x-api-key` and
/// `Content-Type: application/json`, and returns the body verbatim on a
/// success status.
///
/// # Errors
///
/// * [`AppError::Network`] - the request could not be sent
/// * [`AppError::Transport`] - non-success status, with the body text
/// * [`AppError::Json`] - the body is not valid JSON
///
/// Every error is logged before it is returned.
///
/// # Example
///
/// ```ignore
/// use tdu_client::application::rate_limiter::RateLimiter;
/// use tdu_client::transport::make_http_request;
/// use reqwest::{Client, Method};
///
/// let client = Client::new();
/// let limiter = RateLimiter::default();
/// let body = make_http_request(
///     &client,
///     Some(&limiter),
///     Method::GET,
///     "https://admin.tducoin.com/api/gift?page=1&limit=10",
///     "your-api-key",
/// )
/// .await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Option<&RateLimiter>,
    method: Method,
    url: &str,
    api_key: &str,
) -> Result<Value, AppError> {
    let id = request_id();
    if let Some(limiter) = rate_limiter {
        limiter.wait().await;
    }

    debug!(
        "[{}] {} {} (api key {})",
        id,
        method,
        url,
        mask_api_key(api_key)
    );

    let response = client
        .request(method, url)
        .header(API_KEY_HEADER, api_key)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .send()
        .await
        .map_err(|e| {
            error!("[{}] Error fetching {}: {}", id, url, e);
            AppError::from(e)
        })?;

    let status = response.status();
    debug!("[{}] Response status: {}", id, status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("[{}] Request to {} failed with status {}: {}", id, url, status, body);
        return Err(AppError::Transport { status, body });
    }

    let text = response.text().await.map_err(|e| {
        error!("[{}] Error reading body of {}: {}", id, url, e);
        AppError::from(e)
    })?;

    let body: Value = serde_json::from_str(&text).map_err(|e| {
        error!("[{}] Invalid JSON from {}: {}", id, url, e);
        AppError::from(e)
    })?;
    debug!("[{}] Response: {}", id, body);
    Ok(body)
}
