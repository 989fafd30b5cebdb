// --- File: crates/ptslot_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The approval workflow and durable storage of availability live in an external
//! backend. Handlers and the week loader only see this trait, so tests can swap in
//! an in-memory implementation.

use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;

use crate::error::PtslotError;
use crate::models::{AvailabilityRequest, AvailabilityRequestResult, TimeSlot};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Read and submit trainer availability.
pub trait AvailabilityService: Send + Sync {
    /// Slots already approved for `trainer_id` on dates `from..=to`.
    fn approved_slots(
        &self,
        trainer_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BoxFuture<'_, Vec<TimeSlot>, PtslotError>;

    /// Submit a merged availability request for approval.
    ///
    /// Conflicts with existing work shifts are reported in the result, not as an error.
    fn submit_request(
        &self,
        request: AvailabilityRequest,
    ) -> BoxFuture<'_, AvailabilityRequestResult, PtslotError>;
}
