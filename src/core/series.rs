use crate::domain::model::{
    ChartPoint, ChartSeries, ImplementationResults, MeasurementRecord, ProfileDocument,
};
use crate::utils::error::{DocsError, Result};
use serde::Deserialize;
use serde_json::Value;

impl ProfileDocument {
    /// 站台上的 profile.json 會包一層 `{"environment": {...}, "profile": {...}}`，
    /// 沒有 `profile` 鍵時整份視為操作對照表。
    pub fn from_json(body: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(body)
            .map_err(|e| DocsError::parse(format!("malformed profile document: {}", e)))?;

        let Value::Object(mut root) = root else {
            return Err(DocsError::parse("profile document must be a JSON object"));
        };

        let operations = match root.remove("profile") {
            Some(Value::Object(profile)) => profile,
            Some(_) => return Err(DocsError::parse("'profile' must be a JSON object")),
            None => root,
        };

        Ok(Self {
            operations: operations.into_iter().collect(),
        })
    }

    /// 只解碼單一操作的量測紀錄
    pub fn implementations(&self, operation: &str) -> Result<ImplementationResults> {
        let raw = self
            .operation(operation)
            .ok_or_else(|| DocsError::MissingOperationError {
                operation: operation.to_string(),
            })?;

        ImplementationResults::deserialize(raw).map_err(|e| {
            DocsError::parse(format!("malformed records for '{}': {}", operation, e))
        })
    }
}

fn to_point(implementation: &str, index: usize, record: &MeasurementRecord) -> Result<ChartPoint> {
    if record.size == 0 || record.repetitions == 0 {
        return Err(DocsError::InvalidRecordError {
            implementation: implementation.to_string(),
            index,
            size: record.size,
            repetitions: record.repetitions,
        });
    }

    let operations = record.repetitions as f64 * record.size as f64;
    Ok(ChartPoint {
        x: record.size,
        y: record.latency_ns / operations,
    })
}

/// 把某個操作的量測結果轉成每個實作一條的曲線。
///
/// y 是平均每個元素的操作時間：`latency_ns / (repetitions * size)`。
/// 實作依名稱排序，量測點維持原本順序。
pub fn build_series(profile: &ProfileDocument, operation: &str) -> Result<Vec<ChartSeries>> {
    let results = profile.implementations(operation)?;

    results
        .iter()
        .map(|(implementation, records)| {
            let values = records
                .iter()
                .enumerate()
                .map(|(index, record)| to_point(implementation, index, record))
                .collect::<Result<Vec<_>>>()?;

            Ok(ChartSeries {
                key: implementation.clone(),
                values,
            })
        })
        .collect()
}
