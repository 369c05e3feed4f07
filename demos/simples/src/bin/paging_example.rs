use tdu_client::prelude::*;
use tdu_client::utils::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    let api_key = config.credentials.api_key.clone();
    let page_size = config.page_size;
    let client = Client::new(config)?;

    // Walk the signal pages until the API reports there is nothing left
    let mut page = 1;
    let mut total = 0;
    loop {
        let request = PageRequest::new().with_page(page).with_limit(page_size);
        let signals = client.fetch_more_signals(&api_key, &request).await;
        total += signals.signal_data.len();
        info!("Page {}: {} signals", page, signals.signal_data.len());
        if !signals.signal_has_more {
            break;
        }
        page += 1;
    }
    info!("Fetched {} signals in {} pages", total, page);

    // fetch_page keeps the error, unlike the accessors
    match client
        .fetch_page(&api_key, &Resource::News, &PageRequest::new())
        .await
    {
        Ok(news) => info!("News: {} items", news.len()),
        Err(e) if e.is_shape_mismatch() => warn!("News came back malformed: {}", e),
        Err(e) => error!("News request failed: {}", e),
    }

    Ok(())
}
