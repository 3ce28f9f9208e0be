use crate::core::SiteSource;
use crate::domain::model::VersionIdentifier;
use crate::utils::error::{DocsError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const VERSIONS_PATH: &str = "versions";

pub fn profile_path(version: &VersionIdentifier) -> String {
    format!("releases/{}/profile/profile.json", version)
}

pub struct HttpSiteSource {
    base: Url,
    client: Client,
}

impl HttpSiteSource {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|e| DocsError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // Url::join 會把最後一段當檔名取代掉，所以補上結尾的 '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { base, client })
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| DocsError::ConfigError {
            message: format!("cannot join '{}' onto {}: {}", path, self.base, e),
        })
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path)?;
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(DocsError::HttpStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SiteSource for HttpSiteSource {
    async fn fetch_versions(&self) -> Result<String> {
        self.get_text(VERSIONS_PATH).await
    }

    async fn fetch_profile(&self, version: &VersionIdentifier) -> Result<String> {
        self.get_text(&profile_path(version)).await
    }
}
