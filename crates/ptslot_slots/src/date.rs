// --- File: crates/ptslot_slots/src/date.rs ---
//! Date normalization.
//!
//! Dates reach us as native date-times, `YYYY-MM-DD` strings or ISO-8601
//! instants. Every one of them is collapsed to a venue-local [`NaiveDate`] once,
//! at the boundary. A `YYYY-MM-DD` string is a calendar date and is never
//! read as UTC midnight; an instant is moved into the venue zone before its
//! date is taken. Reading local fields is what keeps a 00:30 Zurich slot on the
//! right day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use ptslot_common::{validation_error, PtslotError, RawTimeSlot, TimeOfDay, TimeSlot};
use tracing::debug;

use crate::context::VenueContext;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// The date representations accepted at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// An absolute instant, already carrying a zone.
    Native(DateTime<Tz>),
    /// A wall-clock date-time, already local to the venue.
    Naive(NaiveDateTime),
    Date(NaiveDate),
    /// `YYYY-MM-DD`, an RFC 3339 instant or a naive ISO date-time.
    Text(String),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Native(value)
    }
}

/// Collapses any [`DateInput`] to the venue-local calendar date.
///
/// Returns `None` for empty or unparsable text.
pub fn normalize_date(input: &DateInput, time_zone: &Tz) -> Option<NaiveDate> {
    match input {
        DateInput::Native(instant) => Some(instant.with_timezone(time_zone).date_naive()),
        DateInput::Naive(local) => Some(local.date()),
        DateInput::Date(date) => Some(*date),
        DateInput::Text(text) => parse_date_text(text, time_zone),
    }
}

/// Canonical `YYYY-MM-DD` form of a date string, or `None`.
pub fn normalize_date_str(text: &str, time_zone: &Tz) -> Option<String> {
    parse_date_text(text, time_zone).map(format_date)
}

/// Today's calendar date at the venue.
pub fn today_in(time_zone: &Tz) -> NaiveDate {
    Utc::now().with_timezone(time_zone).date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date_text(text: &str, time_zone: &Tz) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(time_zone).date_naive());
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|local| local.date())
}

/// Turns a raw slot into a canonical one.
///
/// Slots with an empty or malformed date, or unreadable times, are dropped.
/// Dropping is deliberate and silent apart from a debug line.
pub fn normalize_slot(raw: &RawTimeSlot, context: &VenueContext) -> Option<TimeSlot> {
    let Some(date) = parse_date_text(&raw.date, &context.time_zone) else {
        debug!("Dropping slot with unusable date '{}'", raw.date);
        return None;
    };
    let start_time = raw.start_time.parse::<TimeOfDay>();
    let end_time = raw.end_time.parse::<TimeOfDay>();
    match (start_time, end_time) {
        (Ok(start_time), Ok(end_time)) => Some(TimeSlot::new(
            date,
            start_time,
            end_time,
            raw.max_capacity.unwrap_or(1),
        )),
        _ => {
            debug!(
                "Dropping slot on {} with unusable times '{}'-'{}'",
                date, raw.start_time, raw.end_time
            );
            None
        }
    }
}

pub fn normalize_slots(raw: &[RawTimeSlot], context: &VenueContext) -> Vec<TimeSlot> {
    raw.iter()
        .filter_map(|slot| normalize_slot(slot, context))
        .collect()
}

/// Normalizes slots submitted by a client.
///
/// Rows with an empty or malformed date are dropped as in [`normalize_slots`],
/// but a dated row whose times are not `HH:MM` fails the whole batch.
pub fn normalize_slots_checked(
    raw: &[RawTimeSlot],
    context: &VenueContext,
) -> Result<Vec<TimeSlot>, PtslotError> {
    let mut slots = Vec::with_capacity(raw.len());
    for row in raw {
        let Some(date) = parse_date_text(&row.date, &context.time_zone) else {
            debug!("Dropping slot with unusable date '{}'", row.date);
            continue;
        };
        let start_time = parse_time(&row.start_time, "startTime", date)?;
        let end_time = parse_time(&row.end_time, "endTime", date)?;
        slots.push(TimeSlot::new(
            date,
            start_time,
            end_time,
            row.max_capacity.unwrap_or(1),
        ));
    }
    Ok(slots)
}

fn parse_time(text: &str, field: &str, date: NaiveDate) -> Result<TimeOfDay, PtslotError> {
    text.parse::<TimeOfDay>().map_err(|_| {
        validation_error(format!(
            "{} '{}' on {} is not a valid HH:MM time",
            field, text, date
        ))
    })
}
