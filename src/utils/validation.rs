use crate::utils::error::{DocsError, Result};
use std::collections::HashSet;
use url::Url;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DocsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DocsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(DocsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(DocsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// 頁面必須是 HTML 檔，並且檔名不能重複（輸出目錄只沿用檔名）
pub fn validate_page_files(field_name: &str, files: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for file in files {
        validate_path(field_name, file)?;
        let path = std::path::Path::new(file);
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            if !seen.insert(name) {
                return Err(DocsError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!("Another page is also written as '{}'", name),
                });
            }
        }
        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension {
            Some("html") | Some("htm") => {}
            _ => {
                return Err(DocsError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "Pages must be .html or .htm files".to_string(),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com/docs/").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_formats("formats", &formats).is_ok());

        let invalid = vec!["svg".to_string()];
        assert!(validate_formats("formats", &invalid).is_err());

        assert!(matches!(
            validate_formats("formats", &[]),
            Err(DocsError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_page_files() {
        let pages = vec!["index.html".to_string(), "docs/usage.htm".to_string()];
        assert!(validate_page_files("pages", &pages).is_ok());

        let invalid = vec!["README.md".to_string()];
        assert!(validate_page_files("pages", &invalid).is_err());
    }

    #[test]
    fn test_validate_page_files_rejects_same_file_name() {
        let pages = vec!["docs/index.html".to_string(), "api/index.html".to_string()];
        match validate_page_files("pages", &pages) {
            Err(DocsError::InvalidConfigValueError { value, .. }) => {
                assert_eq!(value, "api/index.html");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }
}
