pub mod browser;
pub mod url_validator;

/// 生成短链接 ID：4 个随机字节的小写十六进制表示
pub fn generate_short_id() -> String {
    use std::iter;

    const HEX_CHARS: &[u8] = b"0123456789abcdef";

    iter::repeat_with(|| HEX_CHARS[rand::random_range(0..HEX_CHARS.len())] as char)
        .take(8)
        .collect()
}

/// Custom slugs and generated ids share one namespace and one charset rule.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_8_lowercase_hex() {
        for _ in 0..100 {
            let id = generate_short_id();
            assert_eq!(id.len(), 8);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_generated_id_passes_slug_charset() {
        assert!(is_valid_slug(&generate_short_id()));
    }

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("promo"));
        assert!(is_valid_slug("my-link_2024"));
        assert!(is_valid_slug("A"));
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("has space"));
        assert!(!is_valid_slug("slash/slash"));
        assert!(!is_valid_slug("emoji🦀"));
        assert!(!is_valid_slug("dot.dot"));
    }
}
