use crate::domain::model::VersionIdentifier;
use crate::utils::error::{DocsError, Result};
use regex::Regex;
use std::collections::BTreeSet;

pub const PLACEHOLDER: &str = "latest.version";
pub const DEFAULT_MARKER: &str = "deps";

#[derive(Debug, Clone, PartialEq)]
pub struct Patched {
    pub html: String,
    pub replaced: usize,
}

fn open_tag_regex() -> Result<Regex> {
    Regex::new(r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*?\b(?i:class)\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>"#)
        .map_err(|e| DocsError::ConfigError {
            message: format!("invalid tag pattern: {}", e),
        })
}

fn is_tag_boundary(byte: Option<u8>) -> bool {
    match byte {
        None | Some(b'>') | Some(b'/') => true,
        Some(other) => other.is_ascii_whitespace(),
    }
}

/// 從 `from` 開始找對應的結束標籤，同名的巢狀元素要先配對掉。
/// `lower` 必須是已轉成 ASCII 小寫的 HTML。
fn find_closing_tag(lower: &str, tag: &str, from: usize) -> Option<usize> {
    let bytes = lower.as_bytes();
    let mut depth = 0usize;
    let mut cursor = from;

    while let Some(offset) = lower[cursor..].find('<') {
        let position = cursor + offset;
        let rest = &lower[position + 1..];

        if let Some(name) = rest.strip_prefix('/') {
            if name.starts_with(tag) && is_tag_boundary(bytes.get(position + 2 + tag.len()).copied()) {
                if depth == 0 {
                    return Some(position);
                }
                depth -= 1;
            }
        } else if rest.starts_with(tag) && is_tag_boundary(bytes.get(position + 1 + tag.len()).copied()) {
            let tag_end = rest.find('>').map(|end| position + 1 + end);
            let self_closing = tag_end.is_some_and(|end| bytes[end - 1] == b'/');
            if !self_closing {
                depth += 1;
            }
        }

        cursor = position + 1;
    }

    None
}

/// 把帶有 marker class 的元素裡第一個 `latest.version` 換成最新版本。
///
/// 元素範圍是從開始標籤到與它配對的結束標籤（包含所有子孫元素）；
/// 巢狀的標記元素若指到同一個位置只會替換一次。標記元素外的文字不會被動到。
pub fn patch_placeholders(html: &str, marker: &str, latest: &VersionIdentifier) -> Result<Patched> {
    let re = open_tag_regex()?;
    let lower = html.to_ascii_lowercase();
    let mut positions = BTreeSet::new();

    for caps in re.captures_iter(html) {
        let classes = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or("");
        if !classes.split_whitespace().any(|class| class == marker) {
            continue;
        }

        let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let content_start = whole.end();
        let tag_name = tag.as_str().to_ascii_lowercase();
        let content_end =
            find_closing_tag(&lower, &tag_name, content_start).unwrap_or(html.len());

        if let Some(offset) = html[content_start..content_end].find(PLACEHOLDER) {
            positions.insert(content_start + offset);
        }
    }

    let mut patched = String::with_capacity(html.len());
    let mut cursor = 0;
    for &position in &positions {
        patched.push_str(&html[cursor..position]);
        patched.push_str(latest.as_str());
        cursor = position + PLACEHOLDER.len();
    }
    patched.push_str(&html[cursor..]);

    Ok(Patched {
        html: patched,
        replaced: positions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(raw: &str) -> VersionIdentifier {
        raw.parse().unwrap()
    }

    #[test]
    fn test_replaces_in_marked_elements_only() {
        let html = r#"<p>latest.version</p>
<pre><code class="xml deps">&lt;version&gt;latest.version&lt;/version&gt;</code></pre>
<span class='deps'>compile 'lib:latest.version'</span>"#;

        let patched = patch_placeholders(html, "deps", &version("2.1")).unwrap();
        assert_eq!(patched.replaced, 2);
        assert!(patched.html.starts_with("<p>latest.version</p>"));
        assert!(patched.html.contains("&lt;version&gt;2.1&lt;/version&gt;"));
        assert!(patched.html.contains("compile 'lib:2.1'"));
    }

    #[test]
    fn test_first_occurrence_per_element() {
        let html = r#"<div class="deps">latest.version and latest.version</div>"#;
        let patched = patch_placeholders(html, "deps", &version("1.0")).unwrap();
        assert_eq!(patched.replaced, 1);
        assert_eq!(patched.html, r#"<div class="deps">1.0 and latest.version</div>"#);
    }

    #[test]
    fn test_nested_marked_elements_replace_once() {
        let html = r#"<pre class="deps"><code class="deps">latest.version</code></pre>"#;
        let patched = patch_placeholders(html, "deps", &version("3.0.1")).unwrap();
        assert_eq!(patched.replaced, 1);
        assert_eq!(
            patched.html,
            r#"<pre class="deps"><code class="deps">3.0.1</code></pre>"#
        );
    }

    #[test]
    fn test_nested_same_name_children_are_inside_element() {
        let html = r#"<div class="deps"><div>Maven</div><pre>latest.version</pre></div>"#;
        let patched = patch_placeholders(html, "deps", &version("2.0")).unwrap();
        assert_eq!(patched.replaced, 1);
        assert_eq!(
            patched.html,
            r#"<div class="deps"><div>Maven</div><pre>2.0</pre></div>"#
        );
    }

    #[test]
    fn test_element_ends_at_its_own_closing_tag() {
        let html = r#"<div><div class="deps"><div>a</div></div><p>latest.version</p></div>"#;
        let patched = patch_placeholders(html, "deps", &version("2.0")).unwrap();
        assert_eq!(patched.replaced, 0);
        assert_eq!(patched.html, html);
    }

    #[test]
    fn test_similar_tag_names_do_not_nest() {
        let html = r#"<p class="deps"><pre>x</pre><param/>latest.version</p>"#;
        let patched = patch_placeholders(html, "deps", &version("1.1")).unwrap();
        assert_eq!(patched.replaced, 1);
        assert!(patched.html.contains("<param/>1.1</p>"));
    }

    #[test]
    fn test_marker_must_match_whole_class() {
        let html = r#"<div class="nodeps">latest.version</div>"#;
        let patched = patch_placeholders(html, "deps", &version("1.0")).unwrap();
        assert_eq!(patched.replaced, 0);
        assert_eq!(patched.html, html);
    }

    #[test]
    fn test_custom_marker() {
        let html = r#"<code class="install">latest.version</code><code class="deps">latest.version</code>"#;
        let patched = patch_placeholders(html, "install", &version("0.4")).unwrap();
        assert_eq!(
            patched.html,
            r#"<code class="install">0.4</code><code class="deps">latest.version</code>"#
        );
    }
}
