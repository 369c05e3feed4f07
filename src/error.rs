/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors produced while talking to the TDU API
///
/// The accessors never return these to their callers; they are logged and
/// turned into empty results. [`crate::application::client::Client::fetch_page`]
/// is the one entry point that surfaces them.
#[derive(Debug)]
pub enum AppError {
    /// The request could not be sent or the connection failed
    Network(reqwest::Error),
    /// The server answered with a non-success status
    Transport {
        /// Status code returned by the server
        status: StatusCode,
        /// Response body, read as text
        body: String,
    },
    /// The response body was not valid JSON
    Json(serde_json::Error),
    /// The response was valid JSON but not the expected envelope
    ShapeMismatch(String),
    /// The caller supplied an unusable argument
    InvalidInput(String),
}

impl AppError {
    /// True for network errors, non-success statuses and unparsable bodies
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Transport { .. } | AppError::Json(_)
        )
    }

    /// True when the body parsed but did not have the expected fields
    #[must_use]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, AppError::ShapeMismatch(_))
    }

    /// Status code of a failed response, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Transport { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Transport { status, body } => {
                write!(f, "http error! status: {status}, message: {body}")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::ShapeMismatch(msg) => write!(f, "invalid data structure: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
