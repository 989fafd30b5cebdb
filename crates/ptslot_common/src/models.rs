// --- File: crates/ptslot_common/src/models.rs ---

// Wire models shared between the slot engine, the HTTP surface and the
// availability backend client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{parse_error, PtslotError};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day in whole minutes since midnight, `00:00..=24:00`.
///
/// `24:00` is only meaningful as an exclusive end.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:30"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// `None` when the result would pass `24:00`.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        Self::from_minutes(self.0.checked_add(minutes)?)
    }
}

impl FromStr for TimeOfDay {
    type Err = PtslotError;

    /// Accepts `H:MM`, `HH:MM` and `HH:MM:SS` (seconds must be zero-padded and are dropped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || parse_error(format!("invalid time of day '{}', expected HH:MM", s));
        let mut parts = s.trim().split(':');
        let (hour, minute) = match (parts.next(), parts.next()) {
            (Some(h), Some(m)) => (h, m),
            _ => return Err(invalid()),
        };
        let second = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if hour.len() > 2 || !all_digits(hour) || minute.len() != 2 || !all_digits(minute) {
            return Err(invalid());
        }
        let hour: u16 = hour.parse().map_err(|_| invalid())?;
        let minute: u16 = minute.parse().map_err(|_| invalid())?;

        let second: u16 = match second {
            Some(sec) if sec.len() == 2 && all_digits(sec) => sec.parse().map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
            None => 0,
        };
        if second >= 60 || (hour == 24 && (minute != 0 || second != 0)) {
            return Err(invalid());
        }

        TimeOfDay::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = PtslotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

fn default_capacity() -> u32 {
    1
}

/// One interval of availability on a venue-local calendar date.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01"))]
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default = "default_capacity")]
    pub max_capacity: u32,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, start_time: TimeOfDay, end_time: TimeOfDay, max_capacity: u32) -> Self {
        Self {
            date,
            start_time,
            end_time,
            max_capacity,
        }
    }

    pub fn start_minutes(&self) -> u16 {
        self.start_time.minutes()
    }

    pub fn end_minutes(&self) -> u16 {
        self.end_time.minutes()
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minutes().saturating_sub(self.start_minutes())
    }
}

/// A time slot as it arrives from a form or another service, before normalization.
///
/// `date` may be `YYYY-MM-DD`, an ISO-8601 instant, a naive ISO date-time or empty.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeSlot {
    #[serde(default)]
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub max_capacity: Option<u32>,
}

impl From<&TimeSlot> for RawTimeSlot {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            date: slot.date.format("%Y-%m-%d").to_string(),
            start_time: slot.start_time.to_string(),
            end_time: slot.end_time.to_string(),
            max_capacity: Some(slot.max_capacity),
        }
    }
}

/// The payload submitted to the backend for manager approval.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub trainer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    pub slots: Vec<TimeSlot>,
    #[serde(default)]
    pub contract_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// An existing work shift that collides with a submitted slot. Advisory only.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictingShift {
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequestResult {
    pub request_id: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub conflict_count: usize,
    #[serde(default)]
    pub conflicting_shifts: Vec<ConflictingShift>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_time_of_day_parsing() {
        assert_eq!(t("09:30").minutes(), 570);
        assert_eq!(t("9:30").minutes(), 570);
        assert_eq!(t("00:00"), TimeOfDay::MIDNIGHT);
        assert_eq!(t("24:00"), TimeOfDay::END_OF_DAY);
        assert_eq!(t("10:15:00").minutes(), 615);
    }

    #[test]
    fn test_time_of_day_rejects_malformed() {
        for bad in ["", "9", "09:3", "09:60", "25:00", "24:30", "ab:cd", "09:30:5", "1:2:3:4", "-1:00"] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_time_of_day_display_is_zero_padded() {
        assert_eq!(TimeOfDay::from_minutes(65).unwrap().to_string(), "01:05");
        assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "24:00");
    }

    #[test]
    fn test_checked_add_minutes_stops_at_end_of_day() {
        assert_eq!(t("23:30").checked_add_minutes(30), Some(TimeOfDay::END_OF_DAY));
        assert_eq!(t("23:45").checked_add_minutes(30), None);
    }

    #[test]
    fn test_time_slot_wire_format() {
        let json = r#"{"date":"2024-01-01","startTime":"09:00","endTime":"09:30","maxCapacity":2}"#;
        let slot: TimeSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(slot.duration_minutes(), 30);
        assert_eq!(serde_json::to_string(&slot).unwrap(), json);
    }

    #[test]
    fn test_time_slot_capacity_defaults_to_one() {
        let slot: TimeSlot =
            serde_json::from_str(r#"{"date":"2024-01-01","startTime":"09:00","endTime":"09:30"}"#)
                .unwrap();
        assert_eq!(slot.max_capacity, 1);
    }

    #[test]
    fn test_time_slot_rejects_bad_time() {
        let result: Result<TimeSlot, _> =
            serde_json::from_str(r#"{"date":"2024-01-01","startTime":"9am","endTime":"09:30"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_status_lowercase() {
        assert_eq!(serde_json::to_string(&RequestStatus::Pending).unwrap(), "\"pending\"");
    }
}
