/// Base URL of the TDU admin API; every endpoint is a relative path under it
pub const API_BASE_URL: &str = "https://admin.tducoin.com/api";
/// Page number used when the caller does not choose one
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not choose one
pub const DEFAULT_LIMIT: u32 = 10;
/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-api-key";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "tdu-client/0.1.0";
/// Default number of requests allowed per rate limiter period, once rate
/// limiting is enabled
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default number of requests that may be sent back to back
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;
/// Polling interval in milliseconds while waiting on the rate limiter
pub const RATE_LIMIT_POLL_MS: u64 = 10;
/// Number of characters of the API key that stay visible in logs
pub const API_KEY_VISIBLE_CHARS: usize = 4;
