#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OPERATION: &str = "Map.put";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 合併 TOML 與命令列之後的最終設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub operation: String,
    pub output_path: String,
    pub formats: Vec<String>,
    pub pages: Vec<String>,
    pub marker: String,
    pub timeout_seconds: u64,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            operation: DEFAULT_OPERATION.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            formats: vec!["json".to_string()],
            pages: Vec::new(),
            marker: crate::core::placeholder::DEFAULT_MARKER.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn operation(&self) -> &str {
        &self.operation
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn formats(&self) -> &[String] {
        &self.formats
    }

    fn pages(&self) -> &[String] {
        &self.pages
    }

    fn marker(&self) -> &str {
        &self.marker
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("operation", &self.operation)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_formats("formats", &self.formats)?;
        validation::validate_page_files("pages", &self.pages)?;
        validation::validate_non_empty_string("marker", &self.marker)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
