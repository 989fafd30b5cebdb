// File: crates/ptslot_slots/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::grid::{CellState, GridCell, WeekGrid};
use crate::models::{
    ApprovedSlotsQuery, ApprovedSlotsResponse, GridRequest, HealthResponse, MergeSlotsRequest,
    SlotsResponse, SubmitAvailabilityRequest,
};
use crate::selection::CellRef;
use ptslot_common::{
    AvailabilityRequest, AvailabilityRequestResult, ConflictingShift, RawTimeSlot, RequestStatus,
    TimeOfDay, TimeSlot,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::merge_slots_handler,
        crate::handlers::week_grid_handler,
        crate::handlers::approved_slots_handler,
        crate::handlers::submit_request_handler,
        crate::handlers::health_handler
    ),
    components(
        schemas(
            TimeOfDay,
            TimeSlot,
            RawTimeSlot,
            MergeSlotsRequest,
            SlotsResponse,
            GridRequest,
            CellState,
            GridCell,
            CellRef,
            WeekGrid,
            ApprovedSlotsQuery,
            ApprovedSlotsResponse,
            SubmitAvailabilityRequest,
            AvailabilityRequest,
            RequestStatus,
            ConflictingShift,
            AvailabilityRequestResult,
            HealthResponse
        )
    ),
    tags(
        (name = "Availability", description = "Trainer availability grid and approval requests"),
        (name = "Health", description = "Liveness")
    ),
    servers(
        (url = "/api", description = "Availability API server")
    )
)]
pub struct SlotsApiDoc;
