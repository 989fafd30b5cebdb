// --- File: crates/ptslot_slots/src/service.rs ---
//! Availability backend client.
//!
//! This module provides the REST implementation of [`AvailabilityService`] and an
//! in-memory one for tests.

use chrono::NaiveDate;
use ptslot_common::{
    create_client, endpoint_url, external_service_error, not_found, AvailabilityRequest,
    AvailabilityRequestResult, AvailabilityService, BoxFuture, PtslotError, RawTimeSlot,
    TimeSlot,
};
use ptslot_config::AvailabilityApiConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::context::VenueContext;
use crate::date::{format_date, normalize_slots};

const SERVICE_NAME: &str = "availability-api";

/// REST client for the backend that owns approved availability.
///
/// Approved slots come back with dates in whatever form the backend stores them;
/// they are normalized against the venue calendar before leaving this client.
#[derive(Clone)]
pub struct HttpAvailabilityService {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    context: VenueContext,
}

impl HttpAvailabilityService {
    pub fn new(config: &AvailabilityApiConfig, context: VenueContext) -> Result<Self, PtslotError> {
        let client = create_client(config.timeout_secs, true)?;
        // fail at startup rather than on the first request
        endpoint_url(&config.base_url, &[])?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
            context,
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Maps a non-success response to an error, keeping the body for the log.
async fn check_status(response: Response, what: &str) -> Result<Response, PtslotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!("{} failed with HTTP {}: {}", what, status, body);
    if status == StatusCode::NOT_FOUND {
        return Err(not_found(format!("{}: {}", what, body)));
    }
    Err(external_service_error(
        SERVICE_NAME,
        format!("{} failed with HTTP {}", what, status),
    ))
}

impl AvailabilityService for HttpAvailabilityService {
    fn approved_slots(
        &self,
        trainer_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BoxFuture<'_, Vec<TimeSlot>, PtslotError> {
        let trainer_id = trainer_id.to_string();

        Box::pin(async move {
            let url = endpoint_url(
                &self.base_url,
                &["trainers", &trainer_id, "availability", "approved"],
            )?;
            debug!("GET {} from={} to={}", url, from, to);

            let request = self
                .client
                .get(url)
                .query(&[("from", format_date(from)), ("to", format_date(to))]);
            let response = self.authorize(request).send().await?;
            let response = check_status(response, "fetching approved slots").await?;

            let raw: Vec<RawTimeSlot> = response.json().await?;
            Ok(normalize_slots(&raw, &self.context))
        })
    }

    fn submit_request(
        &self,
        request: AvailabilityRequest,
    ) -> BoxFuture<'_, AvailabilityRequestResult, PtslotError> {
        Box::pin(async move {
            let url = endpoint_url(
                &self.base_url,
                &["trainers", &request.trainer_id, "availability-requests"],
            )?;
            debug!("POST {} with {} slots", url, request.slots.len());

            let builder = self.client.post(url).json(&request);
            let response = self.authorize(builder).send().await?;
            let response = check_status(response, "submitting availability request").await?;

            let result: AvailabilityRequestResult = response.json().await?;
            info!(
                "Availability request {} for {} is {:?}",
                result.request_id, request.trainer_id, result.status
            );
            Ok(result)
        })
    }
}

/// In-memory availability backend.
pub mod mock {
    use super::*;
    use ptslot_common::{internal_error, ConflictingShift, RequestStatus};
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Holds approved slots and work shifts per trainer and records submissions.
    ///
    /// Submissions are accepted as pending; shifts overlapping a submitted slot are
    /// reported back as conflicts.
    #[derive(Default)]
    pub struct InMemoryAvailabilityService {
        approved: Mutex<Vec<(String, TimeSlot)>>,
        shifts: Mutex<Vec<(String, ConflictingShift)>>,
        submitted: Mutex<Vec<AvailabilityRequest>>,
    }

    impl InMemoryAvailabilityService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_approved(
            mut self,
            trainer_id: &str,
            slots: Vec<TimeSlot>,
        ) -> Result<Self, PtslotError> {
            self.approved
                .get_mut()
                .map_err(|_| lock_poisoned())?
                .extend(slots.into_iter().map(|slot| (trainer_id.to_string(), slot)));
            Ok(self)
        }

        pub fn with_shift(
            mut self,
            trainer_id: &str,
            shift: ConflictingShift,
        ) -> Result<Self, PtslotError> {
            self.shifts
                .get_mut()
                .map_err(|_| lock_poisoned())?
                .push((trainer_id.to_string(), shift));
            Ok(self)
        }

        pub fn submitted(&self) -> Vec<AvailabilityRequest> {
            self.submitted
                .lock()
                .map(|submitted| submitted.clone())
                .unwrap_or_default()
        }
    }

    fn lock_poisoned() -> PtslotError {
        internal_error("in-memory availability store lock poisoned")
    }

    impl AvailabilityService for InMemoryAvailabilityService {
        fn approved_slots(
            &self,
            trainer_id: &str,
            from: NaiveDate,
            to: NaiveDate,
        ) -> BoxFuture<'_, Vec<TimeSlot>, PtslotError> {
            let trainer_id = trainer_id.to_string();

            Box::pin(async move {
                let approved = self.approved.lock().map_err(|_| lock_poisoned())?;
                let mut slots: Vec<TimeSlot> = approved
                    .iter()
                    .filter(|(owner, slot)| *owner == trainer_id && from <= slot.date && slot.date <= to)
                    .map(|(_, slot)| slot.clone())
                    .collect();
                slots.sort_by_key(|slot| (slot.date, slot.start_time));
                Ok(slots)
            })
        }

        fn submit_request(
            &self,
            request: AvailabilityRequest,
        ) -> BoxFuture<'_, AvailabilityRequestResult, PtslotError> {
            Box::pin(async move {
                let conflicting_shifts: Vec<ConflictingShift> = {
                    let shifts = self.shifts.lock().map_err(|_| lock_poisoned())?;
                    shifts
                        .iter()
                        .filter(|(owner, _)| *owner == request.trainer_id)
                        .map(|(_, shift)| shift)
                        .filter(|shift| {
                            request.slots.iter().any(|slot| {
                                slot.date == shift.date
                                    && slot.start_time < shift.end_time
                                    && slot.end_time > shift.start_time
                            })
                        })
                        .cloned()
                        .collect()
                };

                self.submitted
                    .lock()
                    .map_err(|_| lock_poisoned())?
                    .push(request);

                Ok(AvailabilityRequestResult {
                    request_id: Uuid::new_v4().to_string(),
                    status: RequestStatus::Pending,
                    conflict_count: conflicting_shifts.len(),
                    conflicting_shifts,
                })
            })
        }
    }

}
