pub mod engine;
pub mod selector;

pub use crate::domain::model::{ImageDimensions, Pin, PublishedPin};
pub use crate::domain::ports::{BoardPublisher, ImageInspector, PinSource};
pub use crate::utils::error::Result;
