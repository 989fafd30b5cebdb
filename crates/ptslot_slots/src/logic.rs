// --- File: crates/ptslot_slots/src/logic.rs ---
use chrono::NaiveDate;
use ptslot_common::{RawTimeSlot, TimeOfDay, TimeSlot};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::context::VenueContext;
use crate::date::normalize_slots;

// --- Merge Logic ---

/// A disjoint working interval for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
    capacity: u32,
}

impl Interval {
    /// Touching endpoints count, so adjacent cells coalesce.
    fn touches(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        let adjacent = start == self.end || end == self.start;
        let overlaps = start < self.end && end > self.start;
        adjacent || overlaps
    }

    fn absorb(self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            // capacity is a per-slot ceiling, never a sum
            capacity: self.capacity.max(other.capacity),
        }
    }
}

/// Merges selected slots into the minimal set of intervals per date.
///
/// Within a date, overlapping or touching slots collapse into one interval spanning
/// the earliest start to the latest end, with the largest capacity among them. The
/// output is grouped by ascending date and sorted by start time within a date, and no
/// two intervals of the same date overlap or touch.
///
/// Duplicate, overlapping and out-of-order input is fine. The function is pure and
/// never fails. Work is quadratic in the slots of a single date, which is bounded by
/// what a person can click in one week.
pub fn merge_time_slots(slots: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&TimeSlot>> = BTreeMap::new();
    for slot in slots {
        by_date.entry(slot.date).or_default().push(slot);
    }

    let mut merged = Vec::with_capacity(slots.len());
    for (date, mut day_slots) in by_date {
        day_slots.sort_by_key(|slot| (slot.start_time, slot.end_time));
        let intervals = merge_day(&day_slots);
        trace!(
            "Merged {} slots on {} into {} intervals",
            day_slots.len(),
            date,
            intervals.len()
        );
        merged.extend(
            intervals
                .into_iter()
                .map(|interval| TimeSlot::new(date, interval.start, interval.end, interval.capacity)),
        );
    }
    merged
}

fn merge_day(day_slots: &[&TimeSlot]) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = Vec::new();

    for slot in day_slots {
        let incoming = Interval {
            start: slot.start_time,
            end: slot.end_time,
            capacity: slot.max_capacity,
        };
        let (touching, untouched): (Vec<Interval>, Vec<Interval>) = intervals
            .into_iter()
            .partition(|interval| interval.touches(incoming.start, incoming.end));

        intervals = untouched;
        intervals.push(touching.iter().fold(incoming, |acc, interval| acc.absorb(interval)));
    }

    intervals.sort_by_key(|interval| interval.start);
    intervals
}

/// Normalizes raw slots against the venue calendar, then merges them.
///
/// Rows with an empty or malformed date are skipped, not reported.
pub fn merge_raw_slots(raw: &[RawTimeSlot], context: &VenueContext) -> Vec<TimeSlot> {
    let slots = normalize_slots(raw, context);
    if slots.len() != raw.len() {
        debug!(
            "Skipped {} of {} raw slots during normalization",
            raw.len() - slots.len(),
            raw.len()
        );
    }
    merge_time_slots(&slots)
}
