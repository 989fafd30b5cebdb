// File: crates/ptslot_slots/src/handlers.rs
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::NaiveDate;
use ptslot_common::{
    service_unavailable, validation_error, AvailabilityRequest, AvailabilityRequestResult,
    AvailabilityService, PtslotError, TimeSlot,
};
use ptslot_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::context::VenueContext;
use crate::date::{normalize_date, normalize_slots, normalize_slots_checked, DateInput};
use crate::grid::{build_week_grid, week_end_of, week_start_of, GridConfig, WeekGrid};
use crate::logic::merge_time_slots;
use crate::models::{
    ApprovedSlotsQuery, ApprovedSlotsResponse, GridRequest, HealthResponse, MergeSlotsRequest,
    SlotsResponse, SubmitAvailabilityRequest,
};
use crate::validation::{validate_request, validate_time_slots};

// Shared state of the availability handlers
#[derive(Clone)]
pub struct SlotsState {
    pub config: Arc<AppConfig>,
    pub context: VenueContext,
    pub grid: GridConfig,
    /// `None` when no availability backend is configured; the endpoints needing it answer 503.
    pub service: Option<Arc<dyn AvailabilityService>>,
}

impl SlotsState {
    pub fn from_config(
        config: Arc<AppConfig>,
        service: Option<Arc<dyn AvailabilityService>>,
    ) -> Result<Self, PtslotError> {
        let context = VenueContext::from_config(&config)?;
        let grid = GridConfig::from_settings(&config.grid)?;
        Ok(Self {
            config,
            context,
            grid,
            service,
        })
    }

    fn service(&self) -> Result<&Arc<dyn AvailabilityService>, PtslotError> {
        self.service
            .as_ref()
            .ok_or_else(|| service_unavailable("availability backend is not configured"))
    }

    /// The week to show: the one containing `week_of`, or this week at the venue.
    fn resolve_week(&self, week_of: Option<&str>) -> Result<NaiveDate, PtslotError> {
        let date = match week_of.map(str::trim).filter(|text| !text.is_empty()) {
            Some(text) => normalize_date(&DateInput::from(text), &self.context.time_zone)
                .ok_or_else(|| validation_error(format!("invalid weekOf '{}'", text)))?,
            None => self.context.today(),
        };
        Ok(week_start_of(date))
    }

    async fn approved_week(
        &self,
        trainer_id: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<TimeSlot>, PtslotError> {
        let slots = self
            .service()?
            .approved_slots(trainer_id, week_start, week_end_of(week_start))
            .await?;
        Ok(merge_time_slots(&slots))
    }
}

/// Handler merging raw slots into disjoint intervals.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability/merge",
    request_body = MergeSlotsRequest,
    responses(
        (status = 200, description = "Merged slots, per date sorted by start", body = SlotsResponse),
        (status = 400, description = "Unreadable times or a slot not ending after it starts")
    ),
    tag = "Availability"
))]
pub async fn merge_slots_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<MergeSlotsRequest>,
) -> Result<Json<SlotsResponse>, PtslotError> {
    let slots = normalize_slots_checked(&payload.slots, &state.context)?;
    validate_time_slots(&slots)?;
    let slots = merge_time_slots(&slots);
    debug!("Merged {} raw slots into {}", payload.slots.len(), slots.len());
    Ok(Json(SlotsResponse { slots }))
}

/// Handler classifying every cell of a week.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability/grid",
    request_body = GridRequest,
    responses(
        (status = 200, description = "Classified cells of the week", body = WeekGrid),
        (status = 400, description = "Invalid weekOf"),
        (status = 503, description = "Approved slots needed but no backend configured")
    ),
    tag = "Availability"
))]
pub async fn week_grid_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<GridRequest>,
) -> Result<Json<WeekGrid>, PtslotError> {
    let week_start = state.resolve_week(payload.week_of.as_deref())?;
    let selected = normalize_slots(&payload.selected, &state.context);

    let booked = match (&payload.booked, &payload.trainer_id) {
        (Some(booked), _) => normalize_slots(booked, &state.context),
        (None, Some(trainer_id)) => state.approved_week(trainer_id, week_start).await?,
        (None, None) => Vec::new(),
    };

    Ok(Json(build_week_grid(
        week_start,
        &state.grid,
        &selected,
        &booked,
    )))
}

/// Handler returning the approved slots of a trainer's week.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability/approved",
    params(ApprovedSlotsQuery),
    responses(
        (status = 200, description = "Approved slots of the week", body = ApprovedSlotsResponse),
        (status = 400, description = "Invalid weekOf or trainerId"),
        (status = 502, description = "Availability backend failed"),
        (status = 503, description = "No backend configured")
    ),
    tag = "Availability"
))]
pub async fn approved_slots_handler(
    State(state): State<Arc<SlotsState>>,
    Query(query): Query<ApprovedSlotsQuery>,
) -> Result<Json<ApprovedSlotsResponse>, PtslotError> {
    if query.trainer_id.trim().is_empty() {
        return Err(validation_error("trainerId is required"));
    }
    let week_start = state.resolve_week(query.week_of.as_deref())?;
    let slots = state.approved_week(&query.trainer_id, week_start).await?;

    Ok(Json(ApprovedSlotsResponse {
        trainer_id: query.trainer_id,
        week_start,
        week_end: week_end_of(week_start),
        slots,
    }))
}

/// Handler submitting an availability request for approval.
///
/// The slots are merged before they are sent. Conflicts with existing shifts
/// come back in the result and do not fail the request.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability/requests",
    request_body = SubmitAvailabilityRequest,
    responses(
        (status = 200, description = "Request accepted", body = AvailabilityRequestResult),
        (status = 400, description = "Invalid request"),
        (status = 502, description = "Availability backend failed"),
        (status = 503, description = "No backend configured")
    ),
    tag = "Availability"
))]
pub async fn submit_request_handler(
    State(state): State<Arc<SlotsState>>,
    Json(payload): Json<SubmitAvailabilityRequest>,
) -> Result<Json<AvailabilityRequestResult>, PtslotError> {
    let slots = normalize_slots_checked(&payload.slots, &state.context)?;
    validate_time_slots(&slots)?;

    let request = AvailabilityRequest {
        trainer_id: payload.trainer_id.trim().to_string(),
        branch_id: state.context.branch_id.clone(),
        slots: merge_time_slots(&slots),
        contract_ids: payload.contract_ids,
        notes: payload.notes.filter(|notes| !notes.trim().is_empty()),
    };
    validate_request(&request)?;

    let trainer_id = request.trainer_id.clone();
    let slot_count = request.slots.len();
    let result = state.service()?.submit_request(request).await?;

    if result.conflict_count > 0 {
        warn!(
            "Availability request {} for {} overlaps {} existing shifts",
            result.request_id, trainer_id, result.conflict_count
        );
    }
    info!(
        "Submitted {} merged slots for {} as request {}",
        slot_count, trainer_id, result.request_id
    );
    Ok(Json(result))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
))]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
