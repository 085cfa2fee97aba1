//! Request/response DTOs for the JSON API
//!
//! Wire field names are camelCase; this shape is the external contract and
//! matches the persisted entry form.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::registry::UrlEntry;

/// Body of `POST /api/shorten`
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub long_url: String,
    #[serde(default)]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub custom_slug: Option<String>,
}

/// Stats shape returned by shorten and stats endpoints
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UrlStatsResponse {
    pub short_id: String,
    pub long_url: String,
    pub access_count: u64,
    pub last_accessed: Option<i64>,
    pub created_at: i64,
    pub ttl: Option<i64>,
    pub is_expired: bool,
    pub referrers: HashMap<String, u64>,
    pub browser_stats: HashMap<String, u64>,
    pub qr_code: Option<String>,
}

impl UrlStatsResponse {
    pub fn from_entry(entry: &UrlEntry, now_ms: i64) -> Self {
        UrlStatsResponse {
            short_id: entry.short_id.clone(),
            long_url: entry.long_url.clone(),
            access_count: entry.access_count,
            last_accessed: entry.last_accessed,
            created_at: entry.created_at,
            ttl: entry.ttl,
            is_expired: entry.is_expired(now_ms),
            referrers: entry.referrers.clone(),
            browser_stats: entry.browser_stats.clone(),
            qr_code: entry.qr_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_shape_uses_camel_case() {
        let entry = UrlEntry::new(
            "ab12cd34".into(),
            "https://example.com".into(),
            1_000,
            Some(500),
            None,
        );
        let json = serde_json::to_value(UrlStatsResponse::from_entry(&entry, 2_000)).unwrap();

        assert_eq!(json["shortId"], "ab12cd34");
        assert_eq!(json["longUrl"], "https://example.com");
        assert_eq!(json["accessCount"], 0);
        assert_eq!(json["createdAt"], 1_000);
        assert_eq!(json["ttl"], 500);
        assert_eq!(json["isExpired"], true);
        assert_eq!(json["qrCode"], serde_json::Value::Null);
        assert!(json["referrers"].is_object());
        assert!(json["browserStats"].is_object());
    }

    #[test]
    fn test_shorten_request_optional_fields() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"longUrl":"https://example.com"}"#).unwrap();
        assert_eq!(req.long_url, "https://example.com");
        assert_eq!(req.ttl, None);
        assert_eq!(req.custom_slug, None);

        let req: ShortenRequest = serde_json::from_str(
            r#"{"longUrl":"https://example.com","ttl":1000,"customSlug":"promo"}"#,
        )
        .unwrap();
        assert_eq!(req.ttl, Some(1000));
        assert_eq!(req.custom_slug.as_deref(), Some("promo"));
    }
}
