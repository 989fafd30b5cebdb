#[cfg(test)]
mod tests {
    use crate::grid::{
        build_week_grid, classify_cell, is_slot_existing, is_slot_selected, shift_week,
        week_days, week_end_of, week_start_of, CellState, GridConfig,
    };
    use chrono::{Datelike, NaiveDate, Weekday};
    use ptslot_common::{TimeOfDay, TimeSlot};
    use ptslot_config::GridSettings;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap() // Wednesday
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(date(), t(start), t(end), 1)
    }

    #[test]
    fn test_existing_blocks_on_true_overlap() {
        let booked = [slot("09:30", "10:15")];
        assert!(is_slot_existing(date(), t("10:00"), &booked, 30));
        assert!(is_slot_existing(date(), t("09:00"), &booked, 60));
    }

    #[test]
    fn test_existing_ignores_touching_cells() {
        let booked = [slot("09:30", "10:15")];
        assert!(!is_slot_existing(date(), t("10:15"), &booked, 30));
        assert!(!is_slot_existing(date(), t("09:00"), &booked, 30));
    }

    #[test]
    fn test_existing_is_per_date() {
        let booked = [slot("09:30", "10:15")];
        let other_day = date().succ_opt().unwrap();
        assert!(!is_slot_existing(other_day, t("10:00"), &booked, 30));
    }

    #[test]
    fn test_selected_includes_closing_boundary_cell() {
        let selected = [slot("09:00", "10:00")];
        assert!(is_slot_selected(date(), t("10:00"), &selected));
        assert!(is_slot_selected(date(), t("09:00"), &selected));
        assert!(is_slot_selected(date(), t("09:30"), &selected));
        assert!(!is_slot_selected(date(), t("10:30"), &selected));
        assert!(!is_slot_selected(date(), t("08:30"), &selected));
    }

    #[test]
    fn test_existing_wins_over_selected() {
        let selected = [slot("09:00", "10:00")];
        let booked = [slot("09:30", "10:00")];
        assert_eq!(
            classify_cell(date(), t("09:30"), &selected, &booked, 30),
            CellState::Existing
        );
        assert_eq!(
            classify_cell(date(), t("09:00"), &selected, &booked, 30),
            CellState::Selected
        );
        assert_eq!(
            classify_cell(date(), t("11:00"), &selected, &booked, 30),
            CellState::Available
        );
    }

    #[test]
    fn test_week_navigation() {
        let monday = week_start_of(date());
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(week_start_of(monday), monday);

        // Sunday belongs to the week that started six days earlier
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(week_start_of(sunday), monday);

        let days = week_days(monday);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], sunday);
        assert_eq!(week_end_of(monday), sunday);

        assert_eq!(shift_week(monday, 1), NaiveDate::from_ymd_opt(2024, 1, 8));
        assert_eq!(shift_week(monday, -1), NaiveDate::from_ymd_opt(2023, 12, 25));
    }

    #[test]
    fn test_cell_times_cover_half_open_window() {
        let config = GridConfig::new(t("06:00"), t("08:00"), 30).unwrap();
        let times: Vec<String> = config.cell_times().iter().map(|t| t.to_string()).collect();
        assert_eq!(times, vec!["06:00", "06:30", "07:00", "07:30"]);
    }

    #[test]
    fn test_cell_times_until_end_of_day() {
        let config = GridConfig::new(t("23:00"), TimeOfDay::END_OF_DAY, 30).unwrap();
        assert_eq!(config.cell_times().len(), 2);
    }

    #[test]
    fn test_grid_config_validation() {
        assert!(GridConfig::new(t("10:00"), t("09:00"), 30).is_err());
        assert!(GridConfig::new(t("09:00"), t("10:00"), 0).is_err());
        assert_eq!(
            GridConfig::from_settings(&GridSettings::default()).unwrap(),
            GridConfig::default()
        );
        let mut bad = GridSettings::default();
        bad.min_time = "6am".to_string();
        assert!(GridConfig::from_settings(&bad).is_err());
    }

    #[test]
    fn test_build_week_grid() {
        let config = GridConfig::new(t("09:00"), t("11:00"), 30).unwrap();
        let selected = [slot("09:00", "09:30")];
        let booked = [slot("10:00", "11:00")];
        let grid = build_week_grid(date(), &config, &selected, &booked);

        assert_eq!(grid.week_start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(grid.days.len(), 7);
        assert_eq!(grid.cells.len(), 7 * 4);

        let wednesday: Vec<CellState> = grid
            .cells
            .iter()
            .filter(|cell| cell.date == date())
            .map(|cell| cell.state)
            .collect();
        assert_eq!(
            wednesday,
            vec![
                CellState::Selected,
                CellState::Selected, // 09:30 is the boundary cell of 09:00-09:30
                CellState::Existing,
                CellState::Existing,
            ]
        );
        assert!(grid
            .cells
            .iter()
            .filter(|cell| cell.date != date())
            .all(|cell| cell.state == CellState::Available));
    }

    #[test]
    fn test_grid_serializes_camel_case() {
        let config = GridConfig::new(t("09:00"), t("09:30"), 30).unwrap();
        let grid = build_week_grid(date(), &config, &[], &[]);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["weekStart"], "2024-01-01");
        assert_eq!(json["cells"][0]["time"], "09:00");
        assert_eq!(json["cells"][0]["state"], "available");
    }
}
