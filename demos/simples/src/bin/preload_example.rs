use tdu_client::prelude::*;
use tdu_client::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let api_key = config.credentials.api_key.clone();
    let user_id = config
        .credentials
        .user_id
        .clone()
        .unwrap_or_else(|| "1".to_string());

    info!("Creating client for {}", config.rest_api.base_url);
    let client = Client::new(config)?;

    let request = PreloadRequest::new(user_id);
    let data = client.preload_data(&api_key, &request).await;

    info!(
        "Signals: {} (more: {})",
        data.signals.signal_data.len(),
        data.signals.signal_has_more
    );
    info!(
        "News: {} (more: {})",
        data.news.news_data.len(),
        data.news.news_has_more
    );
    info!("User: {}", serde_json::to_string_pretty(&data.user_data)?);

    Ok(())
}
