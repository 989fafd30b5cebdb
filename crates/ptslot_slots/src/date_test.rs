#[cfg(test)]
mod tests {
    use crate::context::VenueContext;
    use crate::date::{format_date, normalize_date, normalize_date_str, normalize_slot, normalize_slots, normalize_slots_checked, DateInput};
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::Tz;
    use ptslot_common::{PtslotError, RawTimeSlot};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(date: &str, start: &str, end: &str) -> RawTimeSlot {
        RawTimeSlot {
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            max_capacity: None,
        }
    }

    #[test]
    fn test_plain_date_is_not_shifted_by_zone() {
        // West of UTC, reading "2024-01-01" as UTC midnight would give Dec 31.
        let tz = Tz::America__New_York;
        assert_eq!(
            normalize_date(&DateInput::from("2024-01-01"), &tz),
            Some(ymd(2024, 1, 1))
        );
        let tz = Tz::Pacific__Kiritimati;
        assert_eq!(
            normalize_date_str("2024-01-01", &tz).as_deref(),
            Some("2024-01-01")
        );
    }

    #[test]
    fn test_instant_uses_venue_local_date() {
        // 23:30 UTC on Jan 1 is already Jan 2 in Zurich.
        let tz = Tz::Europe__Zurich;
        assert_eq!(
            normalize_date(&DateInput::from("2024-01-01T23:30:00Z"), &tz),
            Some(ymd(2024, 1, 2))
        );
        // Midnight Zurich expressed in UTC is the previous day in UTC.
        assert_eq!(
            normalize_date(&DateInput::from("2023-12-31T23:00:00.000Z"), &tz),
            Some(ymd(2024, 1, 1))
        );
        // And the same instant seen from New York is still Dec 31.
        assert_eq!(
            normalize_date(&DateInput::from("2023-12-31T23:00:00Z"), &Tz::America__New_York),
            Some(ymd(2023, 12, 31))
        );
    }

    #[test]
    fn test_native_date_time_uses_venue_zone() {
        let instant = Utc
            .with_ymd_and_hms(2024, 3, 10, 22, 30, 0)
            .unwrap()
            .with_timezone(&Tz::UTC);
        assert_eq!(
            normalize_date(&DateInput::Native(instant), &Tz::Asia__Tokyo),
            Some(ymd(2024, 3, 11))
        );
        assert_eq!(
            normalize_date(&DateInput::Native(instant), &Tz::UTC),
            Some(ymd(2024, 3, 10))
        );
    }

    #[test]
    fn test_naive_date_time_text_is_local() {
        let tz = Tz::Europe__Zurich;
        assert_eq!(
            normalize_date(&DateInput::from("2024-05-05T00:15:00"), &tz),
            Some(ymd(2024, 5, 5))
        );
        assert_eq!(
            normalize_date(&DateInput::from("2024-05-05 23:59:00"), &tz),
            Some(ymd(2024, 5, 5))
        );
    }

    #[test]
    fn test_empty_and_garbage_dates_are_none() {
        let tz = Tz::UTC;
        assert_eq!(normalize_date(&DateInput::from(""), &tz), None);
        assert_eq!(normalize_date(&DateInput::from("   "), &tz), None);
        assert_eq!(normalize_date(&DateInput::from("tomorrow"), &tz), None);
        assert_eq!(normalize_date(&DateInput::from("2024-13-01"), &tz), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2024, 2, 9)), "2024-02-09");
    }

    #[test]
    fn test_normalize_slot_drops_invalid_rows() {
        let context = VenueContext::new(Tz::Europe__Zurich);
        let slots = normalize_slots(
            &[
                raw("2024-01-01", "09:00", "09:30"),
                raw("", "09:00", "09:30"),
                raw("2024-01-01", "nine", "09:30"),
                raw("2024-01-01T08:00:00Z", "10:00", "10:30"),
            ],
            &context,
        );
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].date, ymd(2024, 1, 1));
        assert_eq!(slots[0].max_capacity, 1);
        assert_eq!(slots[1].start_time.to_string(), "10:00");
    }

    #[test]
    fn test_normalize_slot_keeps_capacity() {
        let context = VenueContext::default();
        let mut row = raw("2024-01-01", "09:00", "09:30");
        row.max_capacity = Some(4);
        assert_eq!(normalize_slot(&row, &context).unwrap().max_capacity, 4);
    }

    #[test]
    fn test_checked_normalization_skips_dates_but_rejects_times() {
        let context = VenueContext::new(Tz::Europe__Zurich);
        let slots = normalize_slots_checked(
            &[
                raw("2024-01-01", "09:00", "09:30"),
                raw("not a date", "nine", "09:30"),
                raw("", "09:00", "09:30"),
            ],
            &context,
        )
        .unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].date, ymd(2024, 1, 1));

        let err = normalize_slots_checked(
            &[
                raw("2024-01-01", "09:00", "09:30"),
                raw("2024-01-01", "9am", "11:00"),
            ],
            &context,
        )
        .unwrap_err();
        assert!(matches!(err, PtslotError::ValidationError(_)));
    }
}
