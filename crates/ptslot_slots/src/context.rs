// --- File: crates/ptslot_slots/src/context.rs ---
use chrono::NaiveDate;
use chrono_tz::Tz;
use ptslot_common::{config_error, PtslotError};
use ptslot_config::{venue_time_zone, AppConfig};

use crate::date::today_in;

/// The branch a request is made for and the calendar its dates live in.
///
/// Passed explicitly to everything that interprets dates, instead of reading
/// a global "current branch".
#[derive(Debug, Clone, PartialEq)]
pub struct VenueContext {
    pub branch_id: Option<String>,
    pub time_zone: Tz,
}

impl VenueContext {
    pub fn new(time_zone: Tz) -> Self {
        Self {
            branch_id: None,
            time_zone,
        }
    }

    pub fn with_branch(mut self, branch_id: impl Into<String>) -> Self {
        self.branch_id = Some(branch_id.into());
        self
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, PtslotError> {
        let time_zone = venue_time_zone(config).map_err(config_error)?;
        Ok(Self {
            branch_id: config.venue.branch_id.clone(),
            time_zone,
        })
    }

    /// Today's date as seen at the venue.
    pub fn today(&self) -> NaiveDate {
        today_in(&self.time_zone)
    }
}

impl Default for VenueContext {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}
