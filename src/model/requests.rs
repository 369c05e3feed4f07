/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Paging parameters shared by every list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, starting at 1 (default: 1)
    pub page: u32,
    /// Page size (default: 10)
    pub limit: u32,
    /// Optional cursor; only items done before it are returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_at: Option<String>,
    /// Optional data type filter
    #[serde(rename = "dataType", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            done_at: None,
            data_type: None,
        }
    }
}

impl PageRequest {
    /// Create parameters for the first page of ten items
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the `done_at` cursor
    pub fn with_done_at(mut self, done_at: impl Into<String>) -> Self {
        self.done_at = Some(done_at.into());
        self
    }

    /// Set the data type filter
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// The cursor, if set to a non-empty value
    #[must_use]
    pub fn done_at(&self) -> Option<&str> {
        self.done_at.as_deref().filter(|value| !value.is_empty())
    }

    /// The data type filter, if set to a non-empty value
    #[must_use]
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref().filter(|value| !value.is_empty())
    }
}

/// Parameters for the combined preload call
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadRequest {
    /// User the sections are loaded for
    pub user_id: String,
    /// Paging and filters applied to every section
    #[serde(flatten)]
    pub page: PageRequest,
}

impl PreloadRequest {
    /// Create preload parameters for `user_id` with default paging
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            page: PageRequest::default(),
        }
    }

    /// Replace the paging parameters
    pub fn with_page_request(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}
