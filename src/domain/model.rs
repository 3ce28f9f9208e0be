use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 以點分隔的數字版本號，例如 `2.10.1`。
///
/// 保留原始字串作為顯示與組 URL 用；比較時缺少的段視為 0，
/// 所以 `1.0` 與 `1` 相等。
#[derive(Debug, Clone)]
pub struct VersionIdentifier {
    raw: String,
    segments: Vec<u64>,
}

impl VersionIdentifier {
    pub(crate) fn from_parts(raw: String, segments: Vec<u64>) -> Self {
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for VersionIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// 由新到舊排列，第一個元素就是最新版本。建構時保證非空。
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct VersionList(Vec<VersionIdentifier>);

impl VersionList {
    pub(crate) fn from_sorted(versions: Vec<VersionIdentifier>) -> Self {
        debug_assert!(!versions.is_empty());
        Self(versions)
    }

    pub fn latest(&self) -> &VersionIdentifier {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionIdentifier> {
        self.0.iter()
    }

    pub fn as_strings(&self) -> Vec<String> {
        self.0.iter().map(|v| v.as_str().to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub size: u64,
    pub repetitions: u64,
    pub latency_ns: f64,
}

/// implementation name -> measurements
pub type ImplementationResults = BTreeMap<String, Vec<MeasurementRecord>>;

/// operation name -> implementation name -> measurements
///
/// 各操作保留原始 JSON，只有真正要畫的那個操作才會解碼成量測紀錄；
/// 記憶體類的操作（`Map.memory` 等）紀錄格式不同。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDocument {
    pub operations: BTreeMap<String, serde_json::Value>,
}

impl ProfileDocument {
    pub fn operation(&self, name: &str) -> Option<&serde_json::Value> {
        self.operations.get(name)
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: u64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub key: String,
    pub values: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log { base: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisConfig {
    pub label: String,
    pub scale: AxisScale,
    pub show_max_min: bool,
}

impl AxisConfig {
    pub fn collection_size() -> Self {
        Self {
            label: "Peak collection size".to_string(),
            scale: AxisScale::Log { base: 2 },
            show_max_min: false,
        }
    }

    pub fn operation_time() -> Self {
        Self {
            label: "Average operation time /ns".to_string(),
            scale: AxisScale::Linear,
            show_max_min: false,
        }
    }
}

/// 交給外部圖表元件的完整輸入
#[derive(Debug, Clone, Serialize)]
pub struct ChartDocument {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub operation: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub series: Vec<ChartSeries>,
}

impl ChartDocument {
    pub fn new(version: &VersionIdentifier, operation: &str, series: Vec<ChartSeries>) -> Self {
        Self {
            generated_at: Utc::now(),
            version: version.as_str().to_string(),
            operation: operation.to_string(),
            x_axis: AxisConfig::collection_size(),
            y_axis: AxisConfig::operation_time(),
            series,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub latest: String,
    pub versions: Vec<String>,
    pub pages_patched: usize,
    pub placeholders_replaced: usize,
    pub written: Vec<String>,
}
