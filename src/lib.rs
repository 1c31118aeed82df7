pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use crate::core::{
    engine::{CurationEngine, RunOutcome},
    selector::{rank_by_saves, ImageCheck, RelevanceReport, Selector},
};
pub use adapters::{HttpImageInspector, PinterestClient};
pub use config::{CuratorConfig, SelectionCriteria};
pub use utils::error::{CuratorError, Result};
