//! In-memory URL registry
//!
//! One mapping from short id to [`UrlEntry`], owning create / lookup /
//! access-recording / expiry-sweep semantics. Persistence is the store's
//! job; callers decide when a mutation is worth a save.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::errors::{Result, SnaplinkError};
use crate::services::qr::QrEncoder;
use crate::utils::browser::classify_browser;
use crate::utils::url_validator::validate_url;
use crate::utils::{generate_short_id, is_valid_slug};

pub mod models;

pub use models::{StoredUrlEntry, UrlEntry};

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Result of a create call
#[derive(Debug, Clone)]
pub struct CreateResult {
    pub entry: UrlEntry,
    /// false when an existing live entry for the same target was returned
    pub created: bool,
}

pub struct UrlRegistry {
    entries: HashMap<String, UrlEntry>,
    /// Externally visible prefix of every short link
    public_base_url: String,
    qr: QrEncoder,
}

impl UrlRegistry {
    pub fn new(public_base_url: String, qr: QrEncoder) -> Self {
        UrlRegistry {
            entries: HashMap::new(),
            public_base_url,
            qr,
        }
    }

    /// Create a new short link, or return the existing live entry for the
    /// same target.
    ///
    /// Validation order is part of the contract: target URL, slug charset,
    /// slug uniqueness (expired entries still hold their key), then the
    /// de-duplication scan. A dedup hit wins even when a custom slug was
    /// requested.
    pub fn create(
        &mut self,
        long_url: &str,
        ttl: Option<i64>,
        custom_slug: Option<&str>,
    ) -> Result<CreateResult> {
        validate_url(long_url)?;

        if let Some(slug) = custom_slug {
            if !is_valid_slug(slug) {
                return Err(SnaplinkError::invalid_slug(format!(
                    "Slug may only contain letters, digits, '-' and '_': {:?}",
                    slug
                )));
            }
            if self.entries.contains_key(slug) {
                return Err(SnaplinkError::slug_taken(format!(
                    "Slug already in use: {}",
                    slug
                )));
            }
        }

        let now = now_millis();

        if let Some(existing) = self
            .entries
            .values()
            .find(|e| !e.is_expired(now) && e.long_url == long_url)
        {
            debug!("Dedup hit for target, reusing {}", existing.short_id);
            return Ok(CreateResult {
                entry: existing.clone(),
                created: false,
            });
        }

        let short_id = match custom_slug {
            Some(slug) => slug.to_string(),
            // 32 位熵，碰撞未处理（直接覆盖）
            None => generate_short_id(),
        };

        let short_url = format!("{}/{}", self.public_base_url, short_id);
        let qr_code = match self.qr.encode_svg(&short_url) {
            Ok(svg) => Some(svg),
            Err(e) => {
                warn!("QR encoding failed for {}: {}", short_id, e);
                None
            }
        };

        let entry = UrlEntry::new(short_id.clone(), long_url.to_string(), now, ttl, qr_code);
        self.entries.insert(short_id, entry.clone());

        Ok(CreateResult {
            entry,
            created: true,
        })
    }

    /// Plain lookup, no expiry side effects.
    pub fn get(&self, short_id: &str) -> Option<&UrlEntry> {
        self.entries.get(short_id)
    }

    /// Record one successful redirect on a live entry.
    ///
    /// An expired entry is removed here as a side effect; the caller gets
    /// `Expired` and is expected to persist the deletion.
    pub fn record_access(
        &mut self,
        short_id: &str,
        referrer: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<()> {
        let now = now_millis();

        match self.entries.get(short_id) {
            None => {
                return Err(SnaplinkError::not_found(format!(
                    "No entry for short id: {}",
                    short_id
                )));
            }
            Some(entry) if entry.is_expired(now) => {
                self.entries.remove(short_id);
                return Err(SnaplinkError::expired(format!(
                    "Entry expired and removed: {}",
                    short_id
                )));
            }
            Some(_) => {}
        }

        if let Some(entry) = self.entries.get_mut(short_id) {
            entry.access_count += 1;
            entry.last_accessed = Some(now);

            let referrer_label = match referrer {
                Some(r) if !r.is_empty() => r.to_string(),
                _ => "Direct".to_string(),
            };
            *entry.referrers.entry(referrer_label).or_insert(0) += 1;

            let browser_label = classify_browser(user_agent);
            *entry.browser_stats.entry(browser_label.to_string()).or_insert(0) += 1;
        }

        Ok(())
    }

    /// Remove every expired entry; returns how many were removed so the
    /// caller knows whether a save is due.
    pub fn sweep_expired(&mut self) -> usize {
        let now = now_millis();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    /// Full table as an ordered list, for the store.
    pub fn snapshot(&self) -> Vec<(String, UrlEntry)> {
        let mut entries: Vec<(String, UrlEntry)> = self
            .entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Bulk replace, used only when loading from the store.
    pub fn restore<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, UrlEntry)>,
    {
        self.entries = entries.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
