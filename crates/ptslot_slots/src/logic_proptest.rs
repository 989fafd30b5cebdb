#[cfg(test)]
mod tests {
    use crate::logic::merge_time_slots;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;
    use ptslot_common::{TimeOfDay, TimeSlot};
    use std::collections::BTreeMap;

    // Helper: one slot on one of three consecutive dates, at least a minute long
    fn slot_strategy() -> impl Strategy<Value = TimeSlot> {
        (0..3u64, 0..1439u16, 1..=120u16, 1..=12u32).prop_map(|(day, start, length, capacity)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(day))
                .unwrap();
            let end = (start + length).min(24 * 60);
            TimeSlot::new(
                date,
                TimeOfDay::from_minutes(start).unwrap(),
                TimeOfDay::from_minutes(end).unwrap(),
                capacity,
            )
        })
    }

    // Helper: grid-aligned half-hour cells, like the ones produced by clicking
    fn cell_strategy() -> impl Strategy<Value = TimeSlot> {
        (0..3u64, 12..44u16, 1..=4u32).prop_map(|(day, cell, capacity)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(day))
                .unwrap();
            TimeSlot::new(
                date,
                TimeOfDay::from_minutes(cell * 30).unwrap(),
                TimeOfDay::from_minutes(cell * 30 + 30).unwrap(),
                capacity,
            )
        })
    }

    fn slots_strategy() -> impl Strategy<Value = Vec<TimeSlot>> {
        prop_oneof![
            prop::collection::vec(slot_strategy(), 0..40),
            prop::collection::vec(cell_strategy(), 0..60),
        ]
    }

    // Helper: minutes covered per date
    fn coverage(slots: &[TimeSlot]) -> BTreeMap<NaiveDate, Vec<bool>> {
        let mut covered: BTreeMap<NaiveDate, Vec<bool>> = BTreeMap::new();
        for slot in slots {
            let minutes = covered
                .entry(slot.date)
                .or_insert_with(|| vec![false; 24 * 60]);
            for minute in slot.start_minutes()..slot.end_minutes() {
                minutes[minute as usize] = true;
            }
        }
        covered
    }

    proptest! {
        // Merging an already merged set changes nothing
        #[test]
        fn test_merge_is_idempotent(slots in slots_strategy()) {
            let once = merge_time_slots(&slots);
            let twice = merge_time_slots(&once);
            prop_assert_eq!(once, twice);
        }

        // The union of covered minutes is preserved per date
        #[test]
        fn test_merge_preserves_coverage(slots in slots_strategy()) {
            let merged = merge_time_slots(&slots);
            prop_assert_eq!(coverage(&slots), coverage(&merged));
        }

        // Intervals of one date neither overlap nor touch
        #[test]
        fn test_merged_intervals_are_separated(slots in slots_strategy()) {
            let merged = merge_time_slots(&slots);
            for pair in merged.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if a.date == b.date {
                    prop_assert!(a.end_time < b.start_time,
                        "{:?} and {:?} overlap or touch", a, b);
                } else {
                    prop_assert!(a.date < b.date, "dates out of order: {:?} then {:?}", a, b);
                }
            }
            for slot in &merged {
                prop_assert!(slot.start_time < slot.end_time);
            }
        }

        // Input order does not matter
        #[test]
        fn test_merge_ignores_input_order(
            (slots, shuffled) in slots_strategy()
                .prop_flat_map(|slots| (Just(slots.clone()), Just(slots).prop_shuffle()))
        ) {
            prop_assert_eq!(merge_time_slots(&slots), merge_time_slots(&shuffled));
        }

        // Every input lands inside one output whose capacity is at least its own
        #[test]
        fn test_merged_capacity_covers_inputs(slots in slots_strategy()) {
            let merged = merge_time_slots(&slots);
            for input in &slots {
                let container = merged.iter().find(|out| {
                    out.date == input.date
                        && out.start_time <= input.start_time
                        && input.end_time <= out.end_time
                });
                prop_assert!(container.is_some(), "{:?} not covered by {:?}", input, merged);
                prop_assert!(container.unwrap().max_capacity >= input.max_capacity);
            }
        }
    }
}
