// --- File: crates/ptslot_slots/src/models.rs ---
// Request and response bodies of the availability HTTP surface.
use chrono::NaiveDate;
use ptslot_common::{RawTimeSlot, TimeSlot};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSlotsRequest {
    pub slots: Vec<RawTimeSlot>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub slots: Vec<TimeSlot>,
}

/// Input for rendering one week of the grid.
///
/// Without `booked`, approved slots are fetched for `trainerId` when one is given.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRequest {
    /// Any date of the wanted week; defaults to today at the venue.
    #[serde(default)]
    pub week_of: Option<String>,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub selected: Vec<RawTimeSlot>,
    #[serde(default)]
    pub booked: Option<Vec<RawTimeSlot>>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedSlotsQuery {
    pub trainer_id: String,
    #[serde(default)]
    pub week_of: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedSlotsResponse {
    pub trainer_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Availability as entered in the form: cell-sized or overlapping slots are fine,
/// they are merged before submission.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAvailabilityRequest {
    pub trainer_id: String,
    pub slots: Vec<RawTimeSlot>,
    #[serde(default)]
    pub contract_ids: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
