use crate::model::pages::{
    ChannelPage, CharityPage, CoursePage, GiftPage, NewsPage, PreloadData, QuizPage, SignalPage,
};
use crate::model::requests::{PageRequest, PreloadRequest};
use async_trait::async_trait;

/// Interface for the content accessors
///
/// Every method issues exactly one GET request and always returns a fully
/// populated value. Failures are logged and replaced by the empty default of
/// the return type, so callers cannot tell "nothing there" from "request
/// failed" by the return value alone.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Loads every section of the first screen with one call
    ///
    /// If the request itself fails, every section is empty. Otherwise each
    /// section is decoded on its own and defaults independently.
    async fn preload_data(&self, api_key: &str, request: &PreloadRequest) -> PreloadData;

    /// Gets a page of signals, honouring the `done_at` cursor
    async fn fetch_more_signals(&self, api_key: &str, request: &PageRequest) -> SignalPage;

    /// Gets a page of signal channels
    async fn fetch_more_channels(&self, api_key: &str, request: &PageRequest) -> ChannelPage;

    /// Gets a page of quizzes
    async fn fetch_more_quiz(&self, api_key: &str, request: &PageRequest) -> QuizPage;

    /// Gets a page of news, honouring the `dataType` filter
    ///
    /// A success body without `data`, or whose `meta.hasMore` is not a
    /// boolean, is treated like a failed request.
    async fn fetch_more_news(&self, api_key: &str, request: &PageRequest) -> NewsPage;

    /// Gets a page of the courses of `user_id`
    ///
    /// Validated the same way as news.
    async fn fetch_more_courses(
        &self,
        api_key: &str,
        user_id: &str,
        request: &PageRequest,
    ) -> CoursePage;

    /// Gets a page of charity campaigns
    async fn fetch_more_charity(&self, api_key: &str, request: &PageRequest) -> CharityPage;

    /// Gets a page of gifts
    async fn fetch_more_gifts(&self, api_key: &str, request: &PageRequest) -> GiftPage;
}
