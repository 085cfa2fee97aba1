//! Expiry sweeper tests

use std::time::Duration;

use actix_web::web;
use tempfile::TempDir;
use tokio::sync::RwLock;

use snaplink::registry::UrlRegistry;
use snaplink::runtime::sweeper::spawn_sweeper;
use snaplink::services::AppState;
use snaplink::services::qr::QrEncoder;
use snaplink::storage::JsonStore;

#[tokio::test]
async fn test_sweeper_removes_expired_and_persists() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("urls.json"));
    let mut registry = UrlRegistry::new("http://localhost:3001".into(), QrEncoder::new());

    registry
        .create("https://live.example.com", None, Some("live"))
        .unwrap();
    registry
        .create("https://gone.example.com", Some(10), Some("gone"))
        .unwrap();
    store.save(&registry.snapshot());

    let state = web::Data::new(AppState {
        registry: RwLock::new(registry),
        store,
        default_url: "https://default.example.com".into(),
    });

    spawn_sweeper(state.clone(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(200)).await;

    let registry = state.registry.read().await;
    assert_eq!(registry.len(), 1);
    assert!(registry.get("live").is_some());
    assert!(registry.get("gone").is_none());

    // 清扫后的删除已经落盘
    let raw = std::fs::read_to_string(state.store.file_path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(doc.get("gone").is_none());
    assert!(doc.get("live").is_some());
}

#[tokio::test]
async fn test_sweeper_leaves_live_entries_alone() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("urls.json"));
    let mut registry = UrlRegistry::new("http://localhost:3001".into(), QrEncoder::new());

    let id = registry
        .create("https://example.com", Some(3_600_000), None)
        .unwrap()
        .entry
        .short_id;
    registry.record_access(&id, None, None).unwrap();
    store.save(&registry.snapshot());

    let state = web::Data::new(AppState {
        registry: RwLock::new(registry),
        store,
        default_url: "https://default.example.com".into(),
    });

    spawn_sweeper(state.clone(), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(150)).await;

    let registry = state.registry.read().await;
    let entry = registry.get(&id).unwrap();
    assert_eq!(entry.access_count, 1);
}
