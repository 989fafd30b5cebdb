// --- File: crates/ptslot_slots/src/routes.rs ---

use crate::handlers::{
    approved_slots_handler, health_handler, merge_slots_handler, submit_request_handler,
    week_grid_handler, SlotsState,
};
use crate::context::VenueContext;
use crate::service::HttpAvailabilityService;
use axum::{
    routing::{get, post},
    Router,
};
use ptslot_common::{AvailabilityService, PtslotError};
use ptslot_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Creates a router containing all availability routes.
pub fn routes(state: Arc<SlotsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/availability/merge", post(merge_slots_handler))
        .route("/availability/grid", post(week_grid_handler))
        .route("/availability/approved", get(approved_slots_handler))
        .route("/availability/requests", post(submit_request_handler))
        .with_state(state)
}

/// Builds the state from configuration, wiring the REST backend when `availability_api` is set.
pub fn routes_from_config(config: Arc<AppConfig>) -> Result<Router, PtslotError> {
    let service: Option<Arc<dyn AvailabilityService>> = match &config.availability_api {
        Some(api) => {
            let context = VenueContext::from_config(&config)?;
            info!("Availability backend at {}", api.base_url);
            Some(Arc::new(HttpAvailabilityService::new(api, context)?))
        }
        None => {
            warn!("No availability_api configured; approved slots and submissions are disabled");
            None
        }
    };
    let state = SlotsState::from_config(config, service)?;
    Ok(routes(Arc::new(state)))
}
