// --- File: crates/ptslot_slots/src/grid.rs ---
use chrono::{Datelike, Days, Duration, NaiveDate};
use ptslot_common::{validation_error, PtslotError, TimeOfDay, TimeSlot};
use ptslot_config::GridSettings;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const DAYS_PER_WEEK: u64 = 7;

/// Shape of the weekly grid: one column per day, one row per cell in `[min_time, max_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub min_time: TimeOfDay,
    pub max_time: TimeOfDay,
    pub cell_minutes: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_time: TimeOfDay::from_minutes(6 * 60).unwrap_or(TimeOfDay::MIDNIGHT),
            max_time: TimeOfDay::from_minutes(22 * 60).unwrap_or(TimeOfDay::END_OF_DAY),
            cell_minutes: 30,
        }
    }
}

impl GridConfig {
    pub fn new(
        min_time: TimeOfDay,
        max_time: TimeOfDay,
        cell_minutes: u16,
    ) -> Result<Self, PtslotError> {
        if cell_minutes == 0 {
            return Err(validation_error("cell_minutes must be positive"));
        }
        if min_time >= max_time {
            return Err(validation_error(format!(
                "grid min_time {} must be before max_time {}",
                min_time, max_time
            )));
        }
        Ok(Self {
            min_time,
            max_time,
            cell_minutes,
        })
    }

    pub fn from_settings(settings: &GridSettings) -> Result<Self, PtslotError> {
        Self::new(
            settings.min_time.parse()?,
            settings.max_time.parse()?,
            settings.cell_minutes,
        )
    }

    /// Start times of every row, ascending.
    pub fn cell_times(&self) -> Vec<TimeOfDay> {
        let mut times = Vec::new();
        let mut current = Some(self.min_time);
        while let Some(time) = current.filter(|time| *time < self.max_time) {
            times.push(time);
            current = time.checked_add_minutes(self.cell_minutes);
        }
        times
    }
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Available,
    Selected,
    /// Already approved, read-only.
    Existing,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub state: CellState,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub week_start: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub cell_minutes: u16,
    /// Day-major: all cells of `days[0]`, then `days[1]`, ...
    pub cells: Vec<GridCell>,
}

// --- Cell classification ---

/// Whether a cell shows as part of the working selection.
///
/// True when `time` lies in `[start, end)` of a slot on `date`, and also when it
/// equals a slot's `end` exactly, so the closing boundary cell of a range is drawn
/// too.
pub fn is_slot_selected(date: NaiveDate, time: TimeOfDay, selected: &[TimeSlot]) -> bool {
    selected.iter().any(|slot| {
        slot.date == date
            && ((slot.start_time <= time && time < slot.end_time) || time == slot.end_time)
    })
}

/// Whether a cell is blocked by an approved slot.
///
/// The cell `[time, time + cell_minutes)` must truly overlap the slot; touching
/// endpoints do not block, so a cell right after a booking stays selectable.
pub fn is_slot_existing(
    date: NaiveDate,
    time: TimeOfDay,
    booked: &[TimeSlot],
    cell_minutes: u16,
) -> bool {
    let cell_start = u32::from(time.minutes());
    let cell_end = cell_start + u32::from(cell_minutes);
    booked.iter().any(|slot| {
        slot.date == date
            && cell_start < u32::from(slot.end_minutes())
            && cell_end > u32::from(slot.start_minutes())
    })
}

pub fn classify_cell(
    date: NaiveDate,
    time: TimeOfDay,
    selected: &[TimeSlot],
    booked: &[TimeSlot],
    cell_minutes: u16,
) -> CellState {
    if is_slot_existing(date, time, booked, cell_minutes) {
        CellState::Existing
    } else if is_slot_selected(date, time, selected) {
        CellState::Selected
    } else {
        CellState::Available
    }
}

// --- Week navigation ---

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// The seven dates of the week starting at `week_start`.
pub fn week_days(week_start: NaiveDate) -> Vec<NaiveDate> {
    (0..DAYS_PER_WEEK)
        .filter_map(|offset| week_start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Last date of the week starting at `week_start`.
pub fn week_end_of(week_start: NaiveDate) -> NaiveDate {
    week_start
        .checked_add_days(Days::new(DAYS_PER_WEEK - 1))
        .unwrap_or(week_start)
}

/// Moves a week start by `weeks` (negative goes back).
pub fn shift_week(week_start: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    week_start.checked_add_signed(Duration::try_weeks(weeks)?)
}

/// Lays out and classifies every cell of the week containing `week_of`.
pub fn build_week_grid(
    week_of: NaiveDate,
    config: &GridConfig,
    selected: &[TimeSlot],
    booked: &[TimeSlot],
) -> WeekGrid {
    let week_start = week_start_of(week_of);
    let days = week_days(week_start);
    let times = config.cell_times();

    let cells = days
        .iter()
        .flat_map(|date| {
            times.iter().map(move |time| GridCell {
                date: *date,
                time: *time,
                state: classify_cell(*date, *time, selected, booked, config.cell_minutes),
            })
        })
        .collect();

    WeekGrid {
        week_start,
        days,
        cell_minutes: config.cell_minutes,
        cells,
    }
}
