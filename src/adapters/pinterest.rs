use crate::adapters::{build_client, ensure_success};
use crate::config::ApiConfig;
use crate::domain::model::{Pin, PinFeed, PublishRequest, PublishedPin};
use crate::domain::ports::{BoardPublisher, PinSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Bearer-authenticated client for the feed and board endpoints.
#[derive(Clone)]
pub struct PinterestClient {
    client: Client,
    api: ApiConfig,
}

impl PinterestClient {
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = build_client(api.timeout_seconds)?;
        Ok(Self { client, api })
    }
}

#[async_trait]
impl PinSource for PinterestClient {
    async fn fetch_pins(&self) -> Result<Vec<Pin>> {
        let url = self.api.endpoint("pins");
        tracing::debug!("Fetching pins from: {}", url);

        let mut request = self
            .client
            .get(&url)
            .bearer_auth(self.api.access_token())
            .header(ACCEPT, "application/json");

        if let Some(page_size) = self.api.page_size {
            request = request.query(&[("page_size", page_size)]);
        }

        let response = ensure_success(request.send().await?, "fetch pins").await?;
        let body = response.bytes().await?;
        let feed: PinFeed = serde_json::from_slice(&body)?;

        tracing::info!("Fetched {} pins", feed.items.len());
        if let Some(bookmark) = &feed.bookmark {
            tracing::debug!("Feed has more pages (bookmark: {})", bookmark);
        }

        Ok(feed.items)
    }
}

#[async_trait]
impl BoardPublisher for PinterestClient {
    async fn publish(&self, pin: &Pin) -> Result<PublishedPin> {
        let url = self
            .api
            .endpoint(&format!("boards/{}/pins", self.api.board_id()));
        let payload = PublishRequest::from(pin);
        tracing::debug!("Publishing to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api.access_token())
            .json(&payload)
            .send()
            .await?;
        let response = ensure_success(response, "publish pin").await?;

        // A 2xx is success whatever the body says; the id is informational.
        let body = response.bytes().await?;
        let published = serde_json::from_slice::<PublishedPin>(&body).unwrap_or_default();

        tracing::info!("Successfully pinned: {}", pin.title());
        Ok(published)
    }
}
