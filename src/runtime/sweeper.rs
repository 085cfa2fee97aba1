//! Expiry sweeper
//!
//! One background task on a fixed interval. Each firing removes every
//! expired entry and persists only when something was actually removed.
//! There is no catch-up for intervals missed while the process was down;
//! lazy expiry on the redirect/stats path covers that gap.

use std::time::Duration;

use actix_web::web;
use tracing::{debug, info};

use crate::services::AppState;

pub fn spawn_sweeper(state: web::Data<AppState>, interval: Duration) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let mut registry = state.registry.write().await;
            let removed = registry.sweep_expired();
            if removed > 0 {
                info!("Sweeper removed {} expired links", removed);
                state.store.save(&registry.snapshot());
            } else {
                debug!("Sweeper pass found nothing to remove");
            }
        }
    });

    debug!("Expiry sweeper started, interval {:?}", interval);
}
