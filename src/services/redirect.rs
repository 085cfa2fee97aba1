use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use crate::errors::SnaplinkError;
use crate::services::AppState;
use crate::utils::is_valid_slug;

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        state: web::Data<AppState>,
    ) -> impl Responder {
        let captured_path = path.into_inner();

        if captured_path.is_empty() {
            HttpResponse::TemporaryRedirect()
                .insert_header(("Location", state.default_url.as_str()))
                .finish()
        } else if !is_valid_slug(&captured_path) {
            // 非法短码，直接 404（不碰注册表）
            trace!("Invalid short id rejected: {}", &captured_path);
            Self::not_found_response()
        } else {
            Self::process_redirect(captured_path, req, state).await
        }
    }

    async fn process_redirect(
        short_id: String,
        req: HttpRequest,
        state: web::Data<AppState>,
    ) -> HttpResponse {
        let referrer = header_value(&req, header::REFERER);
        let user_agent = header_value(&req, header::USER_AGENT);

        let mut registry = state.registry.write().await;
        match registry.record_access(&short_id, referrer.as_deref(), user_agent.as_deref()) {
            Ok(()) => {
                let target = match registry.get(&short_id) {
                    Some(entry) => entry.long_url.clone(),
                    None => return Self::not_found_response(),
                };
                state.store.save(&registry.snapshot());

                debug!("Redirecting {} -> {}", short_id, target);
                HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                    .insert_header(("Location", target))
                    .finish()
            }
            Err(SnaplinkError::Expired(_)) => {
                // 惰性删除已经发生，落盘后返回 404
                debug!("Expired link removed on access: {}", short_id);
                state.store.save(&registry.snapshot());

                HttpResponse::build(StatusCode::NOT_FOUND)
                    .insert_header(("Content-Type", "text/html; charset=utf-8"))
                    .body("expired")
            }
            Err(SnaplinkError::NotFound(_)) => {
                debug!("Redirect link not found: {}", short_id);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Unexpected error during redirect for {}: {}", short_id, e);
                HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
                    .insert_header(("Content-Type", "text/html; charset=utf-8"))
                    .body("Internal Server Error")
            }
        }
    }

    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("not found")
    }
}

fn header_value(req: &HttpRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
