use crate::domain::model::VersionIdentifier;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// 給報告用的完整輸出位置
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn operation(&self) -> &str;
    fn output_path(&self) -> &str;
    fn formats(&self) -> &[String];
    fn pages(&self) -> &[String];
    fn marker(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// 文件站台的兩個資料來源：版本清單與各版本的 profile.json
#[async_trait]
pub trait SiteSource: Send + Sync {
    async fn fetch_versions(&self) -> Result<String>;
    async fn fetch_profile(&self, version: &VersionIdentifier) -> Result<String>;
}
