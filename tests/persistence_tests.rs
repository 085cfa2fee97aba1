//! Restart persistence tests
//!
//! The registry must come back from the JSON document with counters and
//! slugs intact.

use snaplink::registry::UrlRegistry;
use snaplink::services::qr::QrEncoder;
use snaplink::storage::JsonStore;
use tempfile::TempDir;

fn new_registry() -> UrlRegistry {
    UrlRegistry::new("http://localhost:3001".into(), QrEncoder::new())
}

#[test]
fn test_registry_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");

    let store = JsonStore::new(&path);
    let mut registry = new_registry();
    registry.restore(store.load().unwrap());

    let id = registry
        .create("https://example.com", Some(86_400_000), None)
        .unwrap()
        .entry
        .short_id;
    registry
        .create("https://promo.example.com", None, Some("promo"))
        .unwrap();
    registry
        .record_access(&id, Some("https://blog.example.com/"), Some("Chrome/121.0"))
        .unwrap();
    store.save(&registry.snapshot());

    // 模拟重启：新 store，新 registry
    let mut restored = new_registry();
    restored.restore(JsonStore::new(&path).load().unwrap());

    assert_eq!(restored.len(), 2);
    let entry = restored.get(&id).unwrap();
    assert_eq!(entry.long_url, "https://example.com");
    assert_eq!(entry.ttl, Some(86_400_000));
    assert_eq!(entry.access_count, 1);
    assert!(entry.last_accessed.is_some());
    assert_eq!(entry.referrers["https://blog.example.com/"], 1);
    assert_eq!(entry.browser_stats["Chrome"], 1);

    // 自定义 slug 条目重启后继续使用持久化的 shortId 作为键
    let promo = restored.get("promo").unwrap();
    assert_eq!(promo.short_id, "promo");
}

#[test]
fn test_dedup_still_applies_after_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");

    let store = JsonStore::new(&path);
    let mut registry = new_registry();
    registry.restore(store.load().unwrap());
    let id = registry
        .create("https://example.com", None, None)
        .unwrap()
        .entry
        .short_id;
    store.save(&registry.snapshot());

    let mut restored = new_registry();
    restored.restore(JsonStore::new(&path).load().unwrap());

    let result = restored.create("https://example.com", None, None).unwrap();
    assert!(!result.created);
    assert_eq!(result.entry.short_id, id);
}

#[test]
fn test_slug_conflict_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("urls.json");

    let store = JsonStore::new(&path);
    let mut registry = new_registry();
    registry.restore(store.load().unwrap());
    registry
        .create("https://example.com", None, Some("promo"))
        .unwrap();
    store.save(&registry.snapshot());

    let mut restored = new_registry();
    restored.restore(JsonStore::new(&path).load().unwrap());

    assert!(
        restored
            .create("https://other.example.com", None, Some("promo"))
            .is_err()
    );
}
