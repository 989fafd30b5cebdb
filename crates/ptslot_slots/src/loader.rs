// --- File: crates/ptslot_slots/src/loader.rs ---
//! Loads a trainer's approved slots for the visible week.
//!
//! Users flip weeks faster than the backend answers. Every load takes a new
//! generation number and a response is only applied while its generation is
//! still the newest, so a slow answer for last week can never overwrite this
//! week's slots.

use chrono::NaiveDate;
use ptslot_common::{AvailabilityService, PtslotError, TimeSlot};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::grid::{week_end_of, week_start_of};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSlots {
    pub trainer_id: String,
    pub week_start: NaiveDate,
    pub slots: Vec<TimeSlot>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied(WeekSlots),
    /// A newer load was started while this one was in flight; its result was dropped.
    Stale { generation: u64 },
}

pub struct WeekLoader {
    service: Arc<dyn AvailabilityService>,
    generation: AtomicU64,
    current: RwLock<Option<WeekSlots>>,
}

impl WeekLoader {
    pub fn new(service: Arc<dyn AvailabilityService>) -> Self {
        Self {
            service,
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Fetches the approved slots of the week containing `week_of`.
    ///
    /// Errors of a superseded load are dropped along with its data.
    pub async fn load(&self, trainer_id: &str, week_of: NaiveDate) -> Result<LoadOutcome, PtslotError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let week_start = week_start_of(week_of);
        debug!(
            "Loading approved slots for {} week {} (generation {})",
            trainer_id, week_start, generation
        );

        let fetched = self
            .service
            .approved_slots(trainer_id, week_start, week_end_of(week_start))
            .await;

        let mut current = self.current.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(
                "Discarding week {} for {} (generation {} superseded)",
                week_start, trainer_id, generation
            );
            return Ok(LoadOutcome::Stale { generation });
        }

        let slots = fetched?;
        info!(
            "Loaded {} approved slots for {} week {}",
            slots.len(),
            trainer_id,
            week_start
        );
        let week = WeekSlots {
            trainer_id: trainer_id.to_string(),
            week_start,
            slots,
            generation,
        };
        *current = Some(week.clone());
        Ok(LoadOutcome::Applied(week))
    }

    /// The most recently applied week, if any.
    pub async fn current(&self) -> Option<WeekSlots> {
        self.current.read().await.clone()
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
