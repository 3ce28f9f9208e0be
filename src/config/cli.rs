use crate::config::toml_config::TomlConfig;
use crate::config::SiteConfig;
use crate::utils::error::{DocsError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "docs-profile")]
#[command(about = "Resolve the latest documentation version and build its performance chart")]
pub struct CliConfig {
    /// Path to a TOML configuration file; flags below override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Root URL of the documentation site
    #[arg(long)]
    pub base_url: Option<String>,

    /// Profile operation to chart (default: Map.put)
    #[arg(long)]
    pub operation: Option<String>,

    /// Output directory (default: ./output)
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output formats: json, csv
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// HTML pages whose placeholder should be patched
    #[arg(long, value_delimiter = ',')]
    pub pages: Vec<String>,

    /// Class marking elements that carry the placeholder (default: deps)
    #[arg(long)]
    pub marker: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 先讀 TOML（若有），再套用命令列上明確給的值
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut site = match (&self.config, &self.base_url) {
            (Some(path), _) => TomlConfig::from_file(path)?.to_site_config(),
            (None, Some(base_url)) => SiteConfig::new(base_url.clone()),
            (None, None) => {
                return Err(DocsError::MissingConfigError {
                    field: "base_url".to_string(),
                })
            }
        };

        if let Some(base_url) = &self.base_url {
            site.base_url = base_url.clone();
        }
        if let Some(operation) = &self.operation {
            site.operation = operation.clone();
        }
        if let Some(output_path) = &self.output_path {
            site.output_path = output_path.clone();
        }
        if !self.formats.is_empty() {
            site.formats = self.formats.clone();
        }
        if !self.pages.is_empty() {
            site.pages = self.pages.clone();
        }
        if let Some(marker) = &self.marker {
            site.marker = marker.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            site.timeout_seconds = timeout;
        }

        Ok(site)
    }
}
