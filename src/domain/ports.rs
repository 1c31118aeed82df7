use crate::domain::model::{ImageDimensions, Pin, PublishedPin};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads one page of candidate pins.
#[async_trait]
pub trait PinSource: Send + Sync {
    async fn fetch_pins(&self) -> Result<Vec<Pin>>;
}

/// Fetches and decodes an image far enough to learn its pixel size.
#[async_trait]
pub trait ImageInspector: Send + Sync {
    async fn dimensions(&self, url: &str) -> Result<ImageDimensions>;
}

/// Adds a pin to the destination board.
#[async_trait]
pub trait BoardPublisher: Send + Sync {
    async fn publish(&self, pin: &Pin) -> Result<PublishedPin>;
}
