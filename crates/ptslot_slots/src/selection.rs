// --- File: crates/ptslot_slots/src/selection.rs ---
use chrono::NaiveDate;
use ptslot_common::{AvailabilityRequest, TimeOfDay, TimeSlot};
use ptslot_config::GridSettings;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::trace;

use crate::context::VenueContext;
use crate::grid::{is_slot_existing, is_slot_selected, GridConfig};
use crate::logic::merge_time_slots;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const DEFAULT_DRAG_THRESHOLD: Duration = Duration::from_millis(200);

/// One grid cell, addressed by its date and start time.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub date: NaiveDate,
    pub time: TimeOfDay,
}

impl CellRef {
    pub fn new(date: NaiveDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The cell overlaps an approved slot, or would run past midnight.
    Blocked,
}

/// The trainer's working selection between opening the grid and submitting it.
///
/// Every selected cell is kept as its own `[time, time + cell)` slot; merging
/// happens only when the request is built.
#[derive(Debug, Clone)]
pub struct Selection {
    slots: Vec<TimeSlot>,
    cell_minutes: u16,
    capacity: u32,
}

impl Selection {
    pub fn new(cell_minutes: u16, capacity: u32) -> Self {
        Self {
            slots: Vec::new(),
            cell_minutes,
            capacity,
        }
    }

    pub fn for_grid(config: &GridConfig, capacity: u32) -> Self {
        Self::new(config.cell_minutes, capacity)
    }

    /// Selection using the configured default capacity for new cells.
    pub fn from_settings(config: &GridConfig, settings: &GridSettings) -> Self {
        Self::for_grid(config, settings.default_capacity.max(1))
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Display state of a cell, including the closing boundary cell of a range.
    pub fn is_selected(&self, date: NaiveDate, time: TimeOfDay) -> bool {
        is_slot_selected(date, time, &self.slots)
    }

    fn position(&self, cell: CellRef) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.date == cell.date && slot.start_time == cell.time)
    }

    fn cell_slot(&self, cell: CellRef) -> Option<TimeSlot> {
        let end = cell.time.checked_add_minutes(self.cell_minutes)?;
        Some(TimeSlot::new(cell.date, cell.time, end, self.capacity))
    }

    /// Click on a cell: removes it if it was picked, otherwise adds it unless booked.
    pub fn toggle(&mut self, cell: CellRef, booked: &[TimeSlot]) -> ToggleOutcome {
        if let Some(index) = self.position(cell) {
            self.slots.remove(index);
            return ToggleOutcome::Removed;
        }
        if is_slot_existing(cell.date, cell.time, booked, self.cell_minutes) {
            return ToggleOutcome::Blocked;
        }
        match self.cell_slot(cell) {
            Some(slot) => {
                self.slots.push(slot);
                ToggleOutcome::Added
            }
            None => ToggleOutcome::Blocked,
        }
    }

    /// Drag from `anchor` to `current`: adds every free cell of the rectangle they span.
    ///
    /// Returns how many cells were added. Booked and already picked cells are skipped.
    pub fn select_range(
        &mut self,
        anchor: CellRef,
        current: CellRef,
        config: &GridConfig,
        booked: &[TimeSlot],
    ) -> usize {
        let (first_date, last_date) = ordered(anchor.date, current.date);
        let (first_time, last_time) = ordered(anchor.time, current.time);
        let times: Vec<TimeOfDay> = config
            .cell_times()
            .into_iter()
            .filter(|time| first_time <= *time && *time <= last_time)
            .collect();

        let mut added = 0;
        for date in first_date.iter_days().take_while(|date| *date <= last_date) {
            for time in &times {
                let cell = CellRef::new(date, *time);
                if self.position(cell).is_some()
                    || is_slot_existing(date, *time, booked, self.cell_minutes)
                {
                    continue;
                }
                if let Some(slot) = self.cell_slot(cell) {
                    self.slots.push(slot);
                    added += 1;
                }
            }
        }
        trace!("Drag selection added {} cells", added);
        added
    }

    /// Merges the selection into the payload submitted for approval.
    pub fn to_request(
        &self,
        trainer_id: &str,
        context: &VenueContext,
        contract_ids: Vec<String>,
        notes: Option<String>,
    ) -> AvailabilityRequest {
        AvailabilityRequest {
            trainer_id: trainer_id.to_string(),
            branch_id: context.branch_id.clone(),
            slots: merge_time_slots(&self.slots),
            contract_ids,
            notes: notes.filter(|text| !text.trim().is_empty()),
        }
    }
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// --- Pointer gestures ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click(CellRef),
    Drag { anchor: CellRef, current: CellRef },
}

#[derive(Debug, Clone, Copy)]
struct Press {
    anchor: CellRef,
    current: CellRef,
    at: Instant,
    dragging: bool,
}

/// Tells clicks from drags by how long the pointer was held, not how far it moved.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    threshold: Duration,
    press: Option<Press>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl PointerTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            press: None,
        }
    }

    pub fn from_millis(threshold_ms: u64) -> Self {
        Self::new(Duration::from_millis(threshold_ms))
    }

    pub fn from_settings(settings: &GridSettings) -> Self {
        Self::from_millis(settings.drag_threshold_ms)
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn press(&mut self, cell: CellRef, at: Instant) {
        self.press = Some(Press {
            anchor: cell,
            current: cell,
            at,
            dragging: false,
        });
    }

    /// Pointer moved onto `cell`. Returns the drag so far once the hold time has passed.
    pub fn enter(&mut self, cell: CellRef, at: Instant) -> Option<Gesture> {
        let threshold = self.threshold;
        let press = self.press.as_mut()?;
        press.current = cell;
        if !press.dragging && at.saturating_duration_since(press.at) >= threshold {
            press.dragging = true;
        }
        press.dragging.then_some(Gesture::Drag {
            anchor: press.anchor,
            current: press.current,
        })
    }

    /// Pointer released. A quick release without a drag is a click on the pressed cell.
    pub fn release(&mut self, at: Instant) -> Option<Gesture> {
        let press = self.press.take()?;
        let held = at.saturating_duration_since(press.at);
        if !press.dragging && held < self.threshold {
            Some(Gesture::Click(press.anchor))
        } else {
            Some(Gesture::Drag {
                anchor: press.anchor,
                current: press.current,
            })
        }
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }
}

/// Applies a finished gesture to the selection.
pub fn apply_gesture(
    selection: &mut Selection,
    gesture: Gesture,
    config: &GridConfig,
    booked: &[TimeSlot],
) -> usize {
    match gesture {
        Gesture::Click(cell) => match selection.toggle(cell, booked) {
            ToggleOutcome::Added | ToggleOutcome::Removed => 1,
            ToggleOutcome::Blocked => 0,
        },
        Gesture::Drag { anchor, current } => selection.select_range(anchor, current, config, booked),
    }
}
