use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One shortened URL with its analytics counters.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub short_id: String,
    pub long_url: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Milliseconds-to-live; `None` means the entry never expires
    pub ttl: Option<i64>,
    pub access_count: u64,
    pub last_accessed: Option<i64>,
    pub referrers: HashMap<String, u64>,
    pub browser_stats: HashMap<String, u64>,
    /// Encoded image payload from the QR collaborator; `None` when encoding failed
    pub qr_code: Option<String>,
}

impl UrlEntry {
    pub fn new(
        short_id: String,
        long_url: String,
        created_at: i64,
        ttl: Option<i64>,
        qr_code: Option<String>,
    ) -> Self {
        UrlEntry {
            short_id,
            long_url,
            created_at,
            ttl,
            access_count: 0,
            last_accessed: None,
            referrers: HashMap::new(),
            browser_stats: HashMap::new(),
            qr_code,
        }
    }

    /// Expiry is a derived predicate, never a stored flag.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        match self.ttl {
            Some(ttl) => now_ms > self.created_at + ttl,
            None => false,
        }
    }
}

/// On-disk form of an entry, camelCase keys.
///
/// The persisted document is a single JSON object keyed by short id; each
/// value is one of these. Whether the id was a caller-supplied slug is not
/// recorded, so a restored entry simply reuses its persisted `shortId`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoredUrlEntry {
    pub short_id: String,
    pub long_url: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub access_count: u64,
    #[serde(default)]
    pub last_accessed: Option<i64>,
    #[serde(default)]
    pub referrers: HashMap<String, u64>,
    #[serde(default)]
    pub browser_stats: HashMap<String, u64>,
    #[serde(default)]
    pub qr_code: Option<String>,
}

impl From<&UrlEntry> for StoredUrlEntry {
    fn from(entry: &UrlEntry) -> Self {
        StoredUrlEntry {
            short_id: entry.short_id.clone(),
            long_url: entry.long_url.clone(),
            created_at: entry.created_at,
            ttl: entry.ttl,
            access_count: entry.access_count,
            last_accessed: entry.last_accessed,
            referrers: entry.referrers.clone(),
            browser_stats: entry.browser_stats.clone(),
            qr_code: entry.qr_code.clone(),
        }
    }
}

impl From<StoredUrlEntry> for UrlEntry {
    fn from(stored: StoredUrlEntry) -> Self {
        UrlEntry {
            short_id: stored.short_id,
            long_url: stored.long_url,
            created_at: stored.created_at,
            ttl: stored.ttl,
            access_count: stored.access_count,
            last_accessed: stored.last_accessed,
            referrers: stored.referrers,
            browser_stats: stored.browser_stats,
            qr_code: stored.qr_code,
        }
    }
}
