/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::PageRequest;
use std::fmt;
use url::{Url, form_urlencoded};

/// Endpoint of the TDU API together with the path parameters it needs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Combined first-load endpoint, `tradingbot/start`
    Preload {
        /// User the sections are fetched for, sent as `user_id`
        user_id: String,
    },
    /// Trading signals, `signal`
    Signal,
    /// Signal channels, `signal/channel`
    Channel,
    /// Quizzes, `quiz`
    Quiz,
    /// News, `news`
    News,
    /// Courses of one user, `courses/{user_id}`
    Courses {
        /// User whose courses are listed
        user_id: String,
    },
    /// Charity campaigns, `charity`
    Charity,
    /// Gifts, `gift`
    Gift,
}

impl Resource {
    /// Path of the endpoint relative to the base URL, without a leading slash
    ///
    /// Shown unencoded; [`Resource::url`] escapes each segment.
    #[must_use]
    pub fn path(&self) -> String {
        self.path_segments().join("/")
    }

    /// Path segments of the endpoint, unencoded
    #[must_use]
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Resource::Preload { .. } => vec!["tradingbot", "start"],
            Resource::Signal => vec!["signal"],
            Resource::Channel => vec!["signal", "channel"],
            Resource::Quiz => vec!["quiz"],
            Resource::News => vec!["news"],
            Resource::Courses { user_id } => vec!["courses", user_id.as_str()],
            Resource::Charity => vec!["charity"],
            Resource::Gift => vec!["gift"],
        }
    }

    /// Whether the endpoint takes the `done_at` cursor
    #[must_use]
    pub fn accepts_done_at(&self) -> bool {
        matches!(self, Resource::Preload { .. } | Resource::Signal)
    }

    /// Whether the endpoint takes the `dataType` filter
    #[must_use]
    pub fn accepts_data_type(&self) -> bool {
        matches!(self, Resource::Preload { .. } | Resource::News)
    }

    /// Whether responses are validated before use
    ///
    /// Strict endpoints reject a success body that lacks `data` or whose
    /// `meta.hasMore` is not a boolean.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        matches!(self, Resource::News | Resource::Courses { .. })
    }

    /// Query parameters for `request`, unencoded
    ///
    /// Parameters appear in the order `page`, `limit`, `done_at`, `user_id`,
    /// `dataType`. Filters the endpoint does not take, and filters that are
    /// absent or empty, are left out entirely.
    #[must_use]
    pub fn query_pairs(&self, request: &PageRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", request.page.to_string()),
            ("limit", request.limit.to_string()),
        ];

        if let Some(done_at) = request.done_at().filter(|_| self.accepts_done_at()) {
            params.push(("done_at", done_at.to_string()));
        }
        if let Resource::Preload { user_id } = self {
            params.push(("user_id", user_id.clone()));
        }
        if let Some(data_type) = request.data_type().filter(|_| self.accepts_data_type()) {
            params.push(("dataType", data_type.to_string()));
        }
        params
    }

    /// Builds the form-encoded query string for `request`
    #[must_use]
    pub fn query(&self, request: &PageRequest) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs(request))
            .finish()
    }

    /// Full request URL under `base_url`
    ///
    /// Path segments and query values are percent-encoded, so a user id such
    /// as `a/b?x=1` stays inside its own segment. Values made only of
    /// letters, digits, `-`, `.` and `_` come out unchanged.
    ///
    /// # Errors
    /// [`AppError::InvalidInput`] if `base_url` is not an absolute URL that
    /// can carry a path.
    pub fn url(&self, base_url: &str, request: &PageRequest) -> Result<String, AppError> {
        let mut url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| AppError::InvalidInput(format!("invalid base url {base_url:?}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidInput(format!("base url {base_url:?} cannot carry a path")))?
            .pop_if_empty()
            .extend(self.path_segments());
        url.set_query(Some(&self.query(request)));
        Ok(url.into())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Preload { .. } => "preload",
            Resource::Signal => "signals",
            Resource::Channel => "channels",
            Resource::Quiz => "quiz",
            Resource::News => "news",
            Resource::Courses { .. } => "courses",
            Resource::Charity => "charity",
            Resource::Gift => "gifts",
        };
        write!(f, "{name}")
    }
}
