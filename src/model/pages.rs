/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::model::responses::{PageResult, Sections};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! resource_page {
    ($(#[$doc:meta])* $name:ident, $items:ident => $items_key:literal, $more:ident => $more_key:literal) => {
        $(#[$doc])*
        #[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// Items exactly as returned by the API
            #[serde(rename = $items_key, default)]
            pub $items: Vec<Value>,
            /// Whether another page is available
            #[serde(rename = $more_key, default)]
            pub $more: bool,
        }

        impl From<PageResult> for $name {
            fn from(page: PageResult) -> Self {
                Self {
                    $items: page.items,
                    $more: page.has_more,
                }
            }
        }

        impl From<$name> for PageResult {
            fn from(page: $name) -> Self {
                PageResult {
                    items: page.$items,
                    has_more: page.$more,
                }
            }
        }
    };
}

resource_page!(
    /// A page of trading signals, `{ signalData, signalHasMore }`
    SignalPage, signal_data => "signalData", signal_has_more => "signalHasMore"
);
resource_page!(
    /// A page of signal results; only delivered through the preload call
    ResultPage, result_data => "resultData", result_has_more => "resultHasMore"
);
resource_page!(
    /// A page of signal channels, `{ channelData, channelHasMore }`
    ChannelPage, channel_data => "channelData", channel_has_more => "channelHasMore"
);
resource_page!(
    /// A page of quizzes, `{ quizData, quizHasMore }`
    QuizPage, quiz_data => "quizData", quiz_has_more => "quizHasMore"
);
resource_page!(
    /// A page of news, `{ newsData, newsHasMore }`
    NewsPage, news_data => "newsData", news_has_more => "newsHasMore"
);
resource_page!(
    /// The courses section of the preload call, `{ courseData, courseHasMore }`
    CourseSection, course_data => "courseData", course_has_more => "courseHasMore"
);
resource_page!(
    /// A page of charity campaigns, `{ charityData, charityHasMore }`
    CharityPage, charity_data => "charityData", charity_has_more => "charityHasMore"
);
resource_page!(
    /// A page of gifts, `{ giftData, giftHasMore }`
    GiftPage, gift_data => "giftData", gift_has_more => "giftHasMore"
);

/// Paging metadata of a course page
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseMeta {
    /// Whether another page is available
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
}

/// A page of courses
///
/// Unlike the other resources, courses keep the API envelope shape
/// `{ data, meta: { hasMore } }`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoursePage {
    /// Courses exactly as returned by the API
    #[serde(default)]
    pub data: Vec<Value>,
    /// Paging metadata
    #[serde(default)]
    pub meta: CourseMeta,
}

impl From<PageResult> for CoursePage {
    fn from(page: PageResult) -> Self {
        Self {
            data: page.items,
            meta: CourseMeta {
                has_more: page.has_more,
            },
        }
    }
}

impl From<CoursePage> for PageResult {
    fn from(page: CoursePage) -> Self {
        PageResult {
            items: page.data,
            has_more: page.meta.has_more,
        }
    }
}

/// Everything the first screen needs, fetched with one call
///
/// Serializes flat: `signalData`, `signalHasMore`, `resultData`, ...,
/// `userData`, ..., `giftHasMore`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreloadData {
    /// Signals section
    #[serde(flatten)]
    pub signals: SignalPage,
    /// Results section
    #[serde(flatten)]
    pub results: ResultPage,
    /// Channels section
    #[serde(flatten)]
    pub channels: ChannelPage,
    /// Quiz section
    #[serde(flatten)]
    pub quiz: QuizPage,
    /// News section
    #[serde(flatten)]
    pub news: NewsPage,
    /// Profile of the requesting user, `{}` when absent
    #[serde(rename = "userData", default)]
    pub user_data: Map<String, Value>,
    /// Courses section
    #[serde(flatten)]
    pub courses: CourseSection,
    /// Charity section
    #[serde(flatten)]
    pub charity: CharityPage,
    /// Gifts section
    #[serde(flatten)]
    pub gifts: GiftPage,
}

impl PreloadData {
    /// Splits a combined response into its sections
    ///
    /// Each section reads `data.<key>` and `meta.<key>.hasMore` and falls back
    /// to its empty default on its own, so one malformed section leaves the
    /// others intact.
    #[must_use]
    pub fn from_response(body: &Value) -> Self {
        let sections = Sections::new(body);
        Self {
            signals: sections.page("signalData").into(),
            results: sections.page("resultData").into(),
            channels: sections.page("channelData").into(),
            quiz: sections.page("quizData").into(),
            news: sections.page("newsData").into(),
            user_data: sections.object("userData"),
            courses: sections.page("courseData").into(),
            charity: sections.page("charityData").into(),
            gifts: sections.page("giftData").into(),
        }
    }

    /// True when no section holds any data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
