// --- File: crates/ptslot_slots/src/validation.rs ---
// Form rules applied before anything reaches the engine or the backend.
use ptslot_common::{validation_error, AvailabilityRequest, PtslotError, TimeSlot};

pub fn validate_time_slot(slot: &TimeSlot) -> Result<(), PtslotError> {
    if slot.end_time <= slot.start_time {
        return Err(validation_error(format!(
            "endTime {} must be after startTime {} on {}",
            slot.end_time, slot.start_time, slot.date
        )));
    }
    if slot.max_capacity == 0 {
        return Err(validation_error(format!(
            "maxCapacity must be at least 1 for {} {}-{}",
            slot.date, slot.start_time, slot.end_time
        )));
    }
    Ok(())
}

pub fn validate_time_slots(slots: &[TimeSlot]) -> Result<(), PtslotError> {
    slots.iter().try_for_each(validate_time_slot)
}

pub fn validate_request(request: &AvailabilityRequest) -> Result<(), PtslotError> {
    if request.trainer_id.trim().is_empty() {
        return Err(validation_error("trainerId is required"));
    }
    if request.slots.is_empty() {
        return Err(validation_error("at least one time slot is required"));
    }
    if request.contract_ids.iter().any(|id| id.trim().is_empty()) {
        return Err(validation_error("contractIds must not contain empty ids"));
    }
    validate_time_slots(&request.slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(start: &str, end: &str, capacity: u32) -> TimeSlot {
        TimeSlot::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            start.parse().unwrap(),
            end.parse().unwrap(),
            capacity,
        )
    }

    fn request(slots: Vec<TimeSlot>) -> AvailabilityRequest {
        AvailabilityRequest {
            trainer_id: "trainer-1".to_string(),
            branch_id: None,
            slots,
            contract_ids: vec![],
            notes: None,
        }
    }

    #[test]
    fn test_valid_slot() {
        assert!(validate_time_slot(&slot("09:00", "09:30", 1)).is_ok());
    }

    #[test]
    fn test_end_must_follow_start() {
        let err = validate_time_slot(&slot("10:00", "09:30", 1)).unwrap_err();
        assert!(matches!(err, PtslotError::ValidationError(_)));
        assert!(validate_time_slot(&slot("10:00", "10:00", 1)).is_err());
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(validate_time_slot(&slot("09:00", "09:30", 0)).is_err());
    }

    #[test]
    fn test_request_rules() {
        assert!(validate_request(&request(vec![slot("09:00", "10:00", 1)])).is_ok());
        assert!(validate_request(&request(vec![])).is_err());

        let mut anonymous = request(vec![slot("09:00", "10:00", 1)]);
        anonymous.trainer_id = "  ".to_string();
        assert!(validate_request(&anonymous).is_err());

        let mut blank_contract = request(vec![slot("09:00", "10:00", 1)]);
        blank_contract.contract_ids = vec!["".to_string()];
        assert!(validate_request(&blank_contract).is_err());

        assert!(validate_request(&request(vec![slot("11:00", "10:00", 1)])).is_err());
    }
}
