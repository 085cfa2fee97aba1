use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use crate::errors::SnaplinkError;
use crate::registry::now_millis;
use crate::services::types::UrlStatsResponse;
use crate::services::{AppState, api_error_response};

pub struct StatsService;

impl StatsService {
    /// `GET /api/stats/{shortId}`
    ///
    /// Stats are returned independent of expiry: an expired entry that has
    /// not been swept yet still answers, with `isExpired: true`.
    pub async fn handle_stats(
        path: web::Path<String>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let short_id = path.into_inner();
        trace!("Stats lookup for {}", short_id);

        let registry = state.registry.read().await;
        match registry.get(&short_id) {
            Some(entry) => {
                HttpResponse::Ok().json(UrlStatsResponse::from_entry(entry, now_millis()))
            }
            None => api_error_response(&SnaplinkError::not_found(format!(
                "No entry for short id: {}",
                short_id
            ))),
        }
    }
}
