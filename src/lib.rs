pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::HttpSiteSource, storage::LocalStorage};
pub use config::{toml_config::TomlConfig, SiteConfig};
pub use core::engine::ProfileEngine;
pub use core::series::build_series;
pub use core::version::{compare_versions, parse_versions, VersionResolver};
pub use utils::error::{DocsError, Result};
