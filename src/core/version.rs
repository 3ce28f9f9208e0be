use crate::core::SiteSource;
use crate::domain::model::{VersionIdentifier, VersionList};
use crate::utils::error::{DocsError, Result};
use std::cmp::Ordering;

impl std::str::FromStr for VersionIdentifier {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        let segments = s
            .split('.')
            .map(|segment| {
                // u64::from_str 也接受 "+1"，這裡只收純數字
                let digits_only =
                    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
                digits_only
                    .then(|| segment.parse::<u64>().ok())
                    .flatten()
                    .ok_or_else(|| {
                        DocsError::parse(format!(
                            "invalid version '{}': segment '{}' is not a number",
                            s, segment
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(VersionIdentifier::from_parts(s.to_string(), segments))
    }
}

impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_segments(self.segments(), other.segments())
    }
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionIdentifier {}

/// 逐段比較，較短的一方缺少的段視為 0
fn compare_segments(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let left = a.get(i).copied().unwrap_or(0);
            let right = b.get(i).copied().unwrap_or(0);
            left.cmp(&right)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// 三態比較兩個版本字串
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    let left: VersionIdentifier = a.parse()?;
    let right: VersionIdentifier = b.parse()?;
    Ok(left.cmp(&right))
}

/// 解析以空白分隔的版本清單，並由新到舊排序。
///
/// 與前面某個版本相等的項目（例如 `1.0` 與 `1`）只保留第一個出現的，
/// 因此結果是嚴格遞減的。
pub fn parse_versions(body: &str) -> Result<VersionList> {
    let mut versions = body
        .split_whitespace()
        .map(str::parse::<VersionIdentifier>)
        .collect::<Result<Vec<_>>>()?;

    if versions.is_empty() {
        return Err(DocsError::parse("versions list is empty"));
    }

    // stable sort: 相等的版本保留原本順序，dedup 會留下第一個
    versions.sort_by(|a, b| b.cmp(a));
    versions.dedup();

    Ok(VersionList::from_sorted(versions))
}

pub struct VersionResolver<'a, S: SiteSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: SiteSource + ?Sized> VersionResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub async fn resolve(&self) -> Result<VersionList> {
        let body = self.source.fetch_versions().await?;
        tracing::debug!("Versions body: {:?}", body.trim());

        let versions = parse_versions(&body)?;
        tracing::info!(
            "🔖 Resolved {} versions, latest is {}",
            versions.len(),
            versions.latest()
        );
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource(&'static str);

    #[async_trait]
    impl SiteSource for StaticSource {
        async fn fetch_versions(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        async fn fetch_profile(&self, _version: &VersionIdentifier) -> Result<String> {
            unreachable!("resolver never fetches profiles")
        }
    }

    #[test]
    fn test_sorts_by_numeric_segments() {
        let versions = parse_versions("1.2 1.10 1.9").unwrap();
        assert_eq!(versions.as_strings(), vec!["1.10", "1.9", "1.2"]);
    }

    #[test]
    fn test_latest_first() {
        let versions = parse_versions("1.0 2.0 1.5").unwrap();
        assert_eq!(versions.as_strings(), vec!["2.0", "1.5", "1.0"]);
        assert_eq!(versions.latest().as_str(), "2.0");
    }

    #[test]
    fn test_ignores_extra_whitespace() {
        let versions = parse_versions("  0.1\n0.3\t\t0.2  \n").unwrap();
        assert_eq!(versions.as_strings(), vec!["0.3", "0.2", "0.1"]);
    }

    #[test]
    fn test_missing_segments_are_zero() {
        assert_eq!(compare_versions("1.0", "1").unwrap(), Ordering::Equal);
        assert_eq!(compare_versions("1.0.1", "1").unwrap(), Ordering::Greater);
        assert_eq!(compare_versions("2", "10.0").unwrap(), Ordering::Less);

        let versions = parse_versions("1 1.0.1 0.9.9").unwrap();
        assert_eq!(versions.as_strings(), vec!["1.0.1", "1", "0.9.9"]);
    }

    #[test]
    fn test_equal_versions_keep_first_occurrence() {
        let versions = parse_versions("1.0 2.0 1 2.0").unwrap();
        assert_eq!(versions.as_strings(), vec!["2.0", "1.0"]);
    }

    #[test]
    fn test_strictly_descending_for_many_versions() {
        let versions = parse_versions("0.1 3.2.1 0.10 2.0 3.2 1.0.0 0.2 10.0").unwrap();
        let items: Vec<&VersionIdentifier> = versions.iter().collect();
        for pair in items.windows(2) {
            assert_eq!(pair[0].cmp(pair[1]), Ordering::Greater);
        }
        assert_eq!(versions.latest().as_str(), "10.0");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(parse_versions(""), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("   \n"), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("1.0 beta"), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("1..2"), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("1.0-rc1"), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("+1.0 0.9"), Err(DocsError::ParseError { .. })));
        assert!(matches!(parse_versions("1.+2"), Err(DocsError::ParseError { .. })));
    }

    #[tokio::test]
    async fn test_resolver_uses_source() {
        let source = StaticSource("0.9 0.10 0.8\n");
        let versions = VersionResolver::new(&source).resolve().await.unwrap();
        assert_eq!(versions.latest().as_str(), "0.10");
        assert_eq!(versions.len(), 3);
    }
}
