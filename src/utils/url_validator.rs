//! URL 验证模块
//!
//! 验证 URL 安全性，阻止危险协议

use url::Url;

use crate::errors::{Result, SnaplinkError};

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 验证目标 URL
///
/// 检查项目：
/// 1. URL 不为空
/// 2. 不是危险协议（javascript:, data:, file: 等）
/// 3. 必须是 http:// 或 https://
/// 4. URL 格式有效（绝对 URI）
pub fn validate_url(url: &str) -> Result<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(SnaplinkError::invalid_url("URL cannot be empty"));
    }

    let url_lower = url.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(SnaplinkError::invalid_url(format!(
                "Dangerous protocol blocked: {}",
                proto
            )));
        }
    }

    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return Err(SnaplinkError::invalid_url(
            "URL must start with http:// or https://",
        ));
    }

    Url::parse(url)
        .map_err(|e| SnaplinkError::invalid_url(format!("Invalid URL format: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_dangerous_protocols() {
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("data:text/html,<script>alert(1)</script>").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("vbscript:msgbox(1)").is_err());
    }

    #[test]
    fn test_invalid_protocols() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("mailto:test@example.com").is_err());
        assert!(validate_url("example.com").is_err());
    }

    #[test]
    fn test_empty_url() {
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
    }

    #[test]
    fn test_case_insensitive_scheme() {
        assert!(matches!(
            validate_url("JAVASCRIPT:alert(1)"),
            Err(SnaplinkError::InvalidUrl(_))
        ));
        assert!(validate_url("HTTP://example.com").is_ok());
        assert!(validate_url("HTTPS://example.com").is_ok());
    }

    #[test]
    fn test_errors_are_invalid_url_variant() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(SnaplinkError::InvalidUrl(_))
        ));
    }
}
