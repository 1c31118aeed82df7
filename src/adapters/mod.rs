// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod image_probe;
pub mod pinterest;

pub use image_probe::HttpImageInspector;
pub use pinterest::PinterestClient;

use crate::utils::error::{CuratorError, Result};
use reqwest::{Client, Response};
use std::time::Duration;

const ERROR_BODY_LIMIT: usize = 512;

/// No timeout unless one is configured; reqwest's default is to wait.
pub(crate) fn build_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    Ok(builder.build()?)
}

/// Turns any non-2xx response into `HttpStatusError`, keeping a body excerpt.
pub(crate) async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    tracing::debug!("{} response status: {}", operation, status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CuratorError::HttpStatusError {
        operation: operation.to_string(),
        status: status.as_u16(),
        body: body.chars().take(ERROR_BODY_LIMIT).collect(),
    })
}
