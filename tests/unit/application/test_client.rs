use crate::common::{API_KEY, client_for, envelope, unreachable_client};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde_json::json;
use tdu_client::prelude::*;
use tokio_test::block_on;

#[tokio::test]
async fn fetch_more_signals_with_cursor() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/signal")
        .match_query(Matcher::Exact("page=2&limit=5&done_at=2024-01-01".to_string()))
        .match_header("x-api-key", API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([{"id": 1}]), true))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = PageRequest::new()
        .with_page(2)
        .with_limit(5)
        .with_done_at("2024-01-01");
    let page = client.fetch_more_signals(API_KEY, &request).await;

    assert_json_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"signalData": [{"id": 1}], "signalHasMore": true})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_more_signals_without_cursor_omits_it() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/signal")
        .match_query(Matcher::Exact("page=1&limit=10".to_string()))
        .with_status(200)
        .with_body(envelope(json!([]), false))
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.fetch_more_signals(API_KEY, &PageRequest::new()).await;

    assert!(page.signal_data.is_empty());
    assert!(!page.signal_has_more);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_more_channels_ignores_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/signal/channel")
        .match_query(Matcher::Exact("page=4&limit=10".to_string()))
        .with_status(200)
        .with_body(envelope(json!([{"name": "vip"}]), true))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = PageRequest::new()
        .with_page(4)
        .with_done_at("2024-01-01")
        .with_data_type("crypto");
    let page = client.fetch_more_channels(API_KEY, &request).await;

    assert_eq!(page.channel_data, vec![json!({"name": "vip"})]);
    assert!(page.channel_has_more);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_more_quiz_defaults_bad_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/quiz")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":{"unexpected":true},"meta":{"hasMore":true}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.fetch_more_quiz(API_KEY, &PageRequest::new()).await;

    assert!(page.quiz_data.is_empty());
    assert!(page.quiz_has_more);
}

#[tokio::test]
async fn fetch_more_news_with_data_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/news")
        .match_query(Matcher::Exact("page=1&limit=3&dataType=crypto".to_string()))
        .with_status(200)
        .with_body(envelope(json!([{"id": 7}, {"id": 8}]), false))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = PageRequest::new().with_limit(3).with_data_type("crypto");
    let page = client.fetch_more_news(API_KEY, &request).await;

    assert_eq!(page.news_data, vec![json!({"id": 7}), json!({"id": 8})]);
    assert!(!page.news_has_more);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_more_news_rejects_malformed_success() {
    let bodies = [
        r#"{"meta":{"hasMore":true}}"#,
        r#"{"data":[{"id":1}],"meta":{"hasMore":"false"}}"#,
        r#"{"data":[{"id":1}]}"#,
        r#"null"#,
    ];
    for body in bodies {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/news")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client.fetch_more_news(API_KEY, &PageRequest::new()).await;
        assert_eq!(page, NewsPage::default(), "body: {body}");
    }
}

#[tokio::test]
async fn fetch_more_courses_puts_user_in_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/courses/user-42")
        .match_query(Matcher::Exact("page=1&limit=10".to_string()))
        .with_status(200)
        .with_body(envelope(json!([{"course": "basics"}]), true))
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client
        .fetch_more_courses(API_KEY, "user-42", &PageRequest::new())
        .await;

    assert_json_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"data": [{"course": "basics"}], "meta": {"hasMore": true}})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_more_courses_failure_keeps_envelope_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/courses/user-42")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client
        .fetch_more_courses(API_KEY, "user-42", &PageRequest::new())
        .await;

    assert_json_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"data": [], "meta": {"hasMore": false}})
    );
}

#[test]
fn fetch_more_charity_blocking() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/charity")
        .match_query(Matcher::Exact("page=1&limit=10".to_string()))
        .with_status(200)
        .with_body(envelope(json!([{"id": "c1"}]), false))
        .create();

    let client = client_for(&server);
    let page = block_on(client.fetch_more_charity(API_KEY, &PageRequest::new()));

    assert_eq!(page.charity_data, vec![json!({"id": "c1"})]);
    assert!(!page.charity_has_more);
    mock.assert();
}

#[tokio::test]
async fn fetch_more_gifts_on_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gift")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client.fetch_more_gifts(API_KEY, &PageRequest::new()).await;

    assert_json_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"giftData": [], "giftHasMore": false})
    );
}

#[tokio::test]
async fn every_accessor_survives_network_failure() {
    let client = unreachable_client();
    let request = PageRequest::new();

    assert_eq!(client.fetch_more_signals(API_KEY, &request).await, SignalPage::default());
    assert_eq!(client.fetch_more_channels(API_KEY, &request).await, ChannelPage::default());
    assert_eq!(client.fetch_more_quiz(API_KEY, &request).await, QuizPage::default());
    assert_eq!(client.fetch_more_news(API_KEY, &request).await, NewsPage::default());
    assert_eq!(
        client.fetch_more_courses(API_KEY, "u1", &request).await,
        CoursePage::default()
    );
    assert_eq!(client.fetch_more_charity(API_KEY, &request).await, CharityPage::default());
    assert_eq!(client.fetch_more_gifts(API_KEY, &request).await, GiftPage::default());
}

#[tokio::test]
async fn fetch_page_reports_what_went_wrong() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gift")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("missing key")
        .create_async()
        .await;
    server
        .mock("GET", "/charity")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":[],"meta":{}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = PageRequest::new();

    let err = client
        .fetch_page(API_KEY, &Resource::Gift, &request)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));

    let err = client
        .fetch_page(API_KEY, &Resource::Charity, &request)
        .await
        .unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[tokio::test]
async fn concurrent_accessors_share_one_client() {
    let mut server = Server::new_async().await;
    let signals = server
        .mock("GET", "/signal")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(json!([1]), false))
        .create_async()
        .await;
    let gifts = server
        .mock("GET", "/gift")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(json!([2]), true))
        .create_async()
        .await;

    let client = client_for(&server);
    let request = PageRequest::new();
    let (signal_page, gift_page) = tokio::join!(
        client.fetch_more_signals(API_KEY, &request),
        client.fetch_more_gifts(API_KEY, &request)
    );

    assert_eq!(signal_page.signal_data, vec![json!(1)]);
    assert!(gift_page.gift_has_more);
    signals.assert_async().await;
    gifts.assert_async().await;
}

#[tokio::test]
async fn calls_beyond_the_default_burst_are_not_throttled() {
    let mut server = Server::new_async().await;
    let calls = DEFAULT_RATE_LIMIT_BURST_SIZE as usize + 5;
    let mock = server
        .mock("GET", "/gift")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(envelope(json!([1]), false))
        .expect(calls)
        .create_async()
        .await;

    let client = client_for(&server);
    let started = std::time::Instant::now();
    let handles: Vec<_> = (0..calls)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.fetch_more_gifts(API_KEY, &PageRequest::new()).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().gift_data, vec![json!(1)]);
    }

    assert!(
        started.elapsed() < std::time::Duration::from_secs(2),
        "{calls} calls took {:?}",
        started.elapsed()
    );
    mock.assert_async().await;
}
