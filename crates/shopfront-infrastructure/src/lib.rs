pub mod config_service;
pub mod paths;

pub use crate::config_service::{ConfigError, ConfigService};
pub use crate::paths::ShopfrontPaths;
