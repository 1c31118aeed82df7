use serde::{Deserialize, Serialize};

/// A feed item as returned by the pins-listing endpoint.
///
/// Every field is optional on the wire; accessors fall back to empty text and
/// zero saves so a sparse item is simply irrelevant rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub saves: u64,
    #[serde(default)]
    pub image: Option<PinImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinImage {
    #[serde(default)]
    pub original: Option<ImageVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Pin {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn original_image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.original.as_ref())
            .and_then(|variant| variant.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// One page of the feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinFeed {
    #[serde(default)]
    pub items: Vec<Pin>,
    #[serde(default)]
    pub bookmark: Option<String>,
}

/// Body of the board pin-creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishRequest {
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Pin> for PublishRequest {
    fn from(pin: &Pin) -> Self {
        Self {
            link: pin.link.clone(),
            title: pin.title.clone(),
            description: pin.description.clone(),
            image_url: pin.original_image_url().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublishedPin {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}
