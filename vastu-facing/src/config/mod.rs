//! Configuration loading for vastu-facing.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod facing;
mod matching;
mod report;

pub use error::ConfigLoadError;
pub use facing::{DEFAULT_CONFIG_PATH, FacingConfig};
pub use matching::MatchingConfig;
pub use report::ReportConfig;
