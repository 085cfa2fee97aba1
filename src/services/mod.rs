//! HTTP handler services
//!
//! Each endpoint is a small service struct composing the shared
//! [`AppState`]: the registry behind a single write lock, the JSON store,
//! and the few config values the handlers need.

use actix_web::HttpResponse;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::error;

use crate::errors::SnaplinkError;
use crate::registry::UrlRegistry;
use crate::storage::JsonStore;

pub mod health;
pub mod qr;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod types;

pub use health::HealthService;
pub use redirect::RedirectService;
pub use shorten::ShortenService;
pub use stats::StatsService;

/// Shared application state, passed by reference into every handler.
///
/// Mutating paths (create, record-access, sweep) take the write guard and
/// hold it across the file save, so no two mutations can interleave
/// between "read entry" and "write file".
pub struct AppState {
    pub registry: RwLock<UrlRegistry>,
    pub store: JsonStore,
    /// Where an empty redirect path is sent
    pub default_url: String,
}

/// Map a domain error onto the API wire format.
///
/// Unexpected failures collapse to a generic 500; the detail only goes to
/// the server log.
pub fn api_error_response(err: &SnaplinkError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("[{}] {}", err.code(), err);
        HttpResponse::build(status).json(json!({ "error": "internal server error" }))
    } else {
        HttpResponse::build(status).json(json!({ "error": err.message() }))
    }
}
