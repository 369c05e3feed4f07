/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::content::ContentService;
use crate::error::AppError;
use crate::model::pages::{
    ChannelPage, CharityPage, CoursePage, GiftPage, NewsPage, PreloadData, QuizPage, SignalPage,
};
use crate::model::requests::{PageRequest, PreloadRequest};
use crate::model::resource::Resource;
use crate::model::responses::PageResult;
use crate::transport::http_client::{HttpClient, HttpTransport};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Client for the TDU content API
///
/// Cheap to clone; clones share the transport. Calls are independent of
/// each other and may run concurrently.
pub struct Client<T: HttpTransport = HttpClient> {
    transport: Arc<T>,
    base_url: String,
}

impl Client<HttpClient> {
    /// Creates a client backed by reqwest
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(HttpClient::new(&config)?);
        Ok(Self::with_transport(&config.rest_api.base_url, transport))
    }

    /// Creates a client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }
}

impl<T: HttpTransport> Client<T> {
    /// Creates a client on top of an existing transport
    pub fn with_transport(base_url: &str, transport: Arc<T>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of `resource` and validates it strictly
    ///
    /// Unlike the accessors, this surfaces the failure so a caller can decide
    /// to retry or report it.
    ///
    /// # Errors
    /// Transport errors as produced by the transport, or
    /// [`AppError::ShapeMismatch`] when the body is not a well-formed page.
    pub async fn fetch_page(
        &self,
        api_key: &str,
        resource: &Resource,
        request: &PageRequest,
    ) -> Result<PageResult, AppError> {
        let body = self.get_json(api_key, resource, request).await?;
        PageResult::from_envelope_strict(&body)
    }

    /// Builds the URL of `resource` and sends one GET request to it
    async fn get_json(
        &self,
        api_key: &str,
        resource: &Resource,
        request: &PageRequest,
    ) -> Result<Value, AppError> {
        let url = resource.url(&self.base_url, request).map_err(|e| {
            error!("{}: {}", resource, e);
            e
        })?;
        self.transport.get_json(&url, api_key).await
    }

    /// One page with per-field defaults; never fails
    async fn page_or_default(
        &self,
        api_key: &str,
        resource: &Resource,
        request: &PageRequest,
    ) -> PageResult {
        info!("Fetching more {} (page {})", resource, request.page);
        match self.get_json(api_key, resource, request).await {
            Ok(body) => {
                let page = PageResult::from_envelope(&body);
                debug!("{}: {} items, has more: {}", resource, page.len(), page.has_more);
                page
            }
            Err(e) => {
                debug!("{}: request failed ({}), returning empty page", resource, e);
                PageResult::empty()
            }
        }
    }

    /// One page validated strictly; malformed bodies count as failures
    async fn validated_page_or_default(
        &self,
        api_key: &str,
        resource: &Resource,
        request: &PageRequest,
    ) -> PageResult {
        info!("Fetching more {} (page {})", resource, request.page);
        match self.fetch_page(api_key, resource, request).await {
            Ok(page) => {
                debug!("{}: {} items, has more: {}", resource, page.len(), page.has_more);
                page
            }
            Err(e @ AppError::ShapeMismatch(_)) => {
                error!("{}: {}", resource, e);
                PageResult::empty()
            }
            Err(e) => {
                debug!("{}: request failed ({}), returning empty page", resource, e);
                PageResult::empty()
            }
        }
    }
}

impl<T: HttpTransport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
        }
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> ContentService for Client<T> {
    async fn preload_data(&self, api_key: &str, request: &PreloadRequest) -> PreloadData {
        let resource = Resource::Preload {
            user_id: request.user_id.clone(),
        };
        info!("Preloading data for user {}", request.user_id);

        match self.get_json(api_key, &resource, &request.page).await {
            Ok(body) => PreloadData::from_response(&body),
            Err(e) => {
                error!("Error during preload: {}", e);
                PreloadData::default()
            }
        }
    }

    async fn fetch_more_signals(&self, api_key: &str, request: &PageRequest) -> SignalPage {
        self.page_or_default(api_key, &Resource::Signal, request)
            .await
            .into()
    }

    async fn fetch_more_channels(&self, api_key: &str, request: &PageRequest) -> ChannelPage {
        self.page_or_default(api_key, &Resource::Channel, request)
            .await
            .into()
    }

    async fn fetch_more_quiz(&self, api_key: &str, request: &PageRequest) -> QuizPage {
        self.page_or_default(api_key, &Resource::Quiz, request)
            .await
            .into()
    }

    async fn fetch_more_news(&self, api_key: &str, request: &PageRequest) -> NewsPage {
        self.validated_page_or_default(api_key, &Resource::News, request)
            .await
            .into()
    }

    async fn fetch_more_courses(
        &self,
        api_key: &str,
        user_id: &str,
        request: &PageRequest,
    ) -> CoursePage {
        if user_id.trim().is_empty() {
            let e = AppError::InvalidInput("courses need a user id".to_string());
            error!("courses: {}", e);
            return CoursePage::default();
        }
        let resource = Resource::Courses {
            user_id: user_id.to_string(),
        };
        self.validated_page_or_default(api_key, &resource, request)
            .await
            .into()
    }

    async fn fetch_more_charity(&self, api_key: &str, request: &PageRequest) -> CharityPage {
        self.page_or_default(api_key, &Resource::Charity, request)
            .await
            .into()
    }

    async fn fetch_more_gifts(&self, api_key: &str, request: &PageRequest) -> GiftPage {
        self.page_or_default(api_key, &Resource::Gift, request)
            .await
            .into()
    }
}
