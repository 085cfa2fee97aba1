use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::trace;

use crate::registry::now_millis;
use crate::services::AppState;

pub struct HealthService;

impl HealthService {
    /// `GET /api/health`
    ///
    /// Counts come from a full scan on every call; nothing is cached.
    pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
        trace!("Received health check request");

        let registry = state.registry.read().await;
        let now = now_millis();

        let total = registry.len();
        let expired = registry.iter().filter(|e| e.is_expired(now)).count();
        let active = total - expired;

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(json!({
                "status": "healthy",
                "totalUrls": total,
                "activeUrls": active,
                "expiredUrls": expired,
            }))
    }
}
