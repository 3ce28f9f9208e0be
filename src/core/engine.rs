use crate::core::placeholder::patch_placeholders;
use crate::core::series::build_series;
use crate::core::version::VersionResolver;
use crate::core::{ConfigProvider, SiteSource, Storage};
use crate::domain::model::{ChartDocument, ProfileDocument, RunReport, VersionIdentifier, VersionList};
use crate::utils::error::{DocsError, Result};
use crate::utils::validation::validate_page_files;
use std::path::Path;

pub const CHART_FILE: &str = "chart.json";
pub const SERIES_CSV_FILE: &str = "series.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchSummary {
    pub pages: usize,
    pub replaced: usize,
}

/// resolve -> patch pages -> fetch profile -> build series -> load
pub struct ProfileEngine<S: SiteSource, St: Storage, C: ConfigProvider> {
    source: S,
    storage: St,
    config: C,
}

impl<S: SiteSource, St: Storage, C: ConfigProvider> ProfileEngine<S, St, C> {
    pub fn new(source: S, storage: St, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    pub async fn resolve(&self) -> Result<VersionList> {
        VersionResolver::new(&self.source).resolve().await
    }

    pub async fn patch_pages(
        &self,
        latest: &VersionIdentifier,
        written: &mut Vec<String>,
    ) -> Result<PatchSummary> {
        // 頁面只以檔名寫入輸出目錄，同名的會互相覆蓋
        validate_page_files("pages", self.config.pages())?;
        let mut summary = PatchSummary::default();

        for page in self.config.pages() {
            let html = tokio::fs::read_to_string(page).await?;
            let patched = patch_placeholders(&html, self.config.marker(), latest)?;

            let file_name = Path::new(page)
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| DocsError::InvalidConfigValueError {
                    field: "pages".to_string(),
                    value: page.clone(),
                    reason: "Page path has no file name".to_string(),
                })?;

            tracing::debug!(
                "Patched {} placeholder(s) in {}",
                patched.replaced,
                page
            );
            self.storage
                .write_file(file_name, patched.html.as_bytes())
                .await?;
            written.push(self.storage.location(file_name));

            summary.pages += 1;
            summary.replaced += patched.replaced;
        }

        Ok(summary)
    }

    pub async fn fetch_profile(&self, version: &VersionIdentifier) -> Result<ProfileDocument> {
        let body = self.source.fetch_profile(version).await?;
        let profile = ProfileDocument::from_json(&body)?;
        tracing::debug!(
            "Profile for {} has operations: {:?}",
            version,
            profile.operation_names().collect::<Vec<_>>()
        );
        Ok(profile)
    }

    pub fn transform(
        &self,
        version: &VersionIdentifier,
        profile: &ProfileDocument,
    ) -> Result<ChartDocument> {
        let operation = self.config.operation();
        let series = build_series(profile, operation)?;
        tracing::info!(
            "📈 Built {} series for {} ({})",
            series.len(),
            operation,
            version
        );
        Ok(ChartDocument::new(version, operation, series))
    }

    pub async fn load(&self, chart: &ChartDocument, written: &mut Vec<String>) -> Result<()> {
        for format in self.config.formats() {
            match format.as_str() {
                "json" => {
                    let json = serde_json::to_string_pretty(chart)?;
                    self.storage.write_file(CHART_FILE, json.as_bytes()).await?;
                    written.push(self.storage.location(CHART_FILE));
                }
                "csv" => {
                    let csv_data = series_to_csv(chart)?;
                    self.storage.write_file(SERIES_CSV_FILE, &csv_data).await?;
                    written.push(self.storage.location(SERIES_CSV_FILE));
                }
                other => {
                    return Err(DocsError::InvalidConfigValueError {
                        field: "formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported output format".to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("🚀 Resolving versions from {}", self.config.base_url());
        let versions = self.resolve().await?;
        let latest = versions.latest();

        let mut written = Vec::new();
        let patch = self.patch_pages(latest, &mut written).await?;
        if patch.pages > 0 {
            tracing::info!(
                "📝 Patched {} page(s), {} placeholder(s) replaced",
                patch.pages,
                patch.replaced
            );
        }

        // profile 一定在版本解析完成之後才抓
        let profile = self.fetch_profile(latest).await?;
        let chart = self.transform(latest, &profile)?;
        self.load(&chart, &mut written).await?;

        Ok(RunReport {
            latest: latest.as_str().to_string(),
            versions: versions.as_strings(),
            pages_patched: patch.pages,
            placeholders_replaced: patch.replaced,
            written,
        })
    }
}

fn series_to_csv(chart: &ChartDocument) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["key", "x", "y"])?;
    for series in &chart.series {
        for point in &series.values {
            writer.write_record([
                series.key.clone(),
                point.x.to_string(),
                point.y.to_string(),
            ])?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| DocsError::IoError(e.into_error()))
}
