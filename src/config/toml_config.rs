use crate::config::{SiteConfig, DEFAULT_OPERATION, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::core::placeholder::DEFAULT_MARKER;
use crate::utils::error::{DocsError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: SiteSection,
    pub profile: Option<ProfileSection>,
    pub output: Option<OutputSection>,
    pub pages: Option<PagesSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesSection {
    pub files: Option<Vec<String>>,
    pub marker: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DocsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DocsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCS_BASE_URL})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DocsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_site_config(&self) -> SiteConfig {
        let profile = self.profile.as_ref();
        let output = self.output.as_ref();
        let pages = self.pages.as_ref();

        SiteConfig {
            base_url: self.site.base_url.clone(),
            operation: profile
                .and_then(|p| p.operation.clone())
                .unwrap_or_else(|| DEFAULT_OPERATION.to_string()),
            output_path: output
                .and_then(|o| o.path.clone())
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            formats: output
                .and_then(|o| o.formats.clone())
                .unwrap_or_else(|| vec!["json".to_string()]),
            pages: pages.and_then(|p| p.files.clone()).unwrap_or_default(),
            marker: pages
                .and_then(|p| p.marker.clone())
                .unwrap_or_else(|| DEFAULT_MARKER.to_string()),
            timeout_seconds: self.site.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_site_config().validate()
    }
}
