use crate::adapters::{build_client, ensure_success};
use crate::domain::model::ImageDimensions;
use crate::domain::ports::ImageInspector;
use crate::utils::error::Result;
use async_trait::async_trait;
use image::ImageReader;
use reqwest::Client;
use std::io::Cursor;

/// Downloads an image and reads its size from the header.
pub struct HttpImageInspector {
    client: Client,
}

impl HttpImageInspector {
    pub fn new(timeout_seconds: Option<u64>) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_seconds)?,
        })
    }
}

#[async_trait]
impl ImageInspector for HttpImageInspector {
    async fn dimensions(&self, url: &str) -> Result<ImageDimensions> {
        tracing::debug!("Fetching image: {}", url);
        let response = ensure_success(self.client.get(url).send().await?, "image fetch").await?;
        let bytes = response.bytes().await?;
        decode_dimensions(&bytes)
    }
}

pub fn decode_dimensions(bytes: &[u8]) -> Result<ImageDimensions> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(ImageDimensions { width, height })
}
