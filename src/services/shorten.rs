use actix_web::{HttpResponse, Responder, web};
use tracing::info;

use crate::registry::now_millis;
use crate::services::types::{ShortenRequest, UrlStatsResponse};
use crate::services::{AppState, api_error_response};

pub struct ShortenService;

impl ShortenService {
    /// `POST /api/shorten`
    ///
    /// Validation failures map to 400, slug conflicts to 409. A dedup hit
    /// returns the existing entry unchanged and skips the save.
    pub async fn handle_shorten(
        body: web::Json<ShortenRequest>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let req = body.into_inner();

        let mut registry = state.registry.write().await;
        match registry.create(&req.long_url, req.ttl, req.custom_slug.as_deref()) {
            Ok(result) => {
                if result.created {
                    info!(
                        "Created short link {} -> {}",
                        result.entry.short_id, result.entry.long_url
                    );
                    state.store.save(&registry.snapshot());
                }
                HttpResponse::Ok().json(UrlStatsResponse::from_entry(&result.entry, now_millis()))
            }
            Err(e) => api_error_response(&e),
        }
    }
}
