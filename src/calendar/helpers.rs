use chrono::{Datelike, Duration, NaiveDate};

use std::collections::HashMap;

use super::data::*;

/// Fixed activity-intensity buckets shared with the renderer's legend.
pub fn contribution_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// Lays out a full year of day-cells into Sunday-aligned week columns.
///
/// Returns `None` only when the year itself is unrepresentable. Cells outside
/// the selected year, and in-year cells after `today`, are sentinel-marked;
/// the total sums in-year cells up to `today` only, so it always equals the
/// sum of the non-sentinel counts.
pub fn build_year_grid(
    year: i32,
    counts: &HashMap<NaiveDate, u32>,
    today: NaiveDate,
) -> Option<ContributionGraph> {
    let first_day = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let last_day = NaiveDate::from_ymd_opt(year, 12, 31)?;

    // Back up to the Sunday on or before Jan 1 so every column holds a full week.
    let offset = first_day.weekday().num_days_from_sunday() as i64;
    let aligned_start = first_day - Duration::days(offset);

    let mut weeks: Vec<Vec<DayCell>> = vec![];
    let mut current_week: Vec<DayCell> = vec![];
    let mut total_contributions = 0u32;

    let mut current = aligned_start;
    loop {
        let in_year = current.year() == year;
        let count = counts.get(&current).copied().unwrap_or(0);

        let cell = if in_year && current <= today {
            total_contributions += count;
            DayCell {
                date: current,
                count: Some(count),
                level: Some(contribution_level(count)),
            }
        } else {
            DayCell {
                date: current,
                count: None,
                level: None,
            }
        };
        current_week.push(cell);

        if current_week.len() == WEEK_LENGTH {
            weeks.push(std::mem::take(&mut current_week));
        }

        // The final partial week keeps padding until it reaches 7 cells.
        if current >= last_day && current_week.is_empty() {
            break;
        }
        current = current.succ_opt()?;
    }

    let mut months = vec![];
    let mut last_month = 0u32;
    for (week_index, week) in weeks.iter().enumerate() {
        if let Some(cell) = week.iter().find(|cell| cell.date.year() == year) {
            let month = cell.date.month();
            if month != last_month {
                months.push(MonthLabel {
                    name: cell.date.format("%b").to_string(),
                    start_week: week_index,
                });
                last_month = month;
            }
        }
    }

    Some(ContributionGraph {
        weeks,
        months,
        total_contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn grid(year: i32, counts: &HashMap<NaiveDate, u32>, today: &str) -> ContributionGraph {
        build_year_grid(year, counts, date(today)).unwrap()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(3, 2)]
    #[case(4, 2)]
    #[case(5, 3)]
    #[case(6, 3)]
    #[case(7, 4)]
    #[case(50, 4)]
    fn bucket_thresholds(#[case] count: u32, #[case] level: u8) {
        assert_eq!(contribution_level(count), level);
    }

    #[rstest]
    #[case(2024)]
    #[case(2025)]
    #[case(2026)]
    fn every_week_column_has_seven_cells(#[case] year: i32) {
        let graph = grid(year, &HashMap::new(), "2026-12-31");
        assert!(!graph.weeks.is_empty());
        for week in &graph.weeks {
            assert_eq!(week.len(), WEEK_LENGTH);
        }
        let total_cells: usize = graph.weeks.iter().map(|w| w.len()).sum();
        assert_eq!(total_cells % 7, 0);
    }

    #[test]
    fn grid_starts_on_a_sunday_and_covers_the_year() {
        let graph = grid(2025, &HashMap::new(), "2026-01-15");
        let first = &graph.weeks[0][0];
        assert_eq!(first.date.weekday(), chrono::Weekday::Sun);
        assert!(first.date <= date("2025-01-01"));

        let last_week = graph.weeks.last().unwrap();
        assert!(last_week[6].date >= date("2025-12-31"));
    }

    #[test]
    fn total_equals_sum_of_non_sentinel_counts() {
        let mut counts = HashMap::new();
        counts.insert(date("2025-03-01"), 3);
        counts.insert(date("2025-03-02"), 7);
        // Outside the selected year; never counted.
        counts.insert(date("2024-12-31"), 9);

        let graph = grid(2025, &counts, "2026-01-15");
        assert_eq!(graph.total_contributions, 10);

        let cell_sum: u32 = graph
            .weeks
            .iter()
            .flatten()
            .filter_map(|cell| cell.count)
            .sum();
        assert_eq!(cell_sum, graph.total_contributions);
    }

    #[test]
    fn future_days_are_sentinel_marked() {
        let mut counts = HashMap::new();
        counts.insert(date("2026-11-30"), 5);

        let graph = grid(2026, &counts, "2026-06-15");
        let future_cell = graph
            .weeks
            .iter()
            .flatten()
            .find(|cell| cell.date == date("2026-11-30"))
            .unwrap();
        assert_eq!(future_cell.count, None);
        assert_eq!(future_cell.level, None);
        // A sentinel day contributes nothing to the total either.
        assert_eq!(graph.total_contributions, 0);
    }

    #[test]
    fn out_of_year_padding_days_are_sentinel_marked() {
        // 2026-01-01 is a Thursday, so the first column starts in December.
        let graph = grid(2026, &HashMap::new(), "2026-06-15");
        let first = &graph.weeks[0][0];
        assert_eq!(first.date, date("2025-12-28"));
        assert_eq!(first.count, None);
    }

    #[test]
    fn month_labels_are_ordered_and_start_with_january() {
        let graph = grid(2025, &HashMap::new(), "2026-01-15");
        assert_eq!(graph.months.len(), 12);
        assert_eq!(graph.months[0].name, "Jan");
        assert_eq!(graph.months[0].start_week, 0);
        for pair in graph.months.windows(2) {
            assert!(pair[0].start_week < pair[1].start_week);
        }
        assert_eq!(graph.months.last().unwrap().name, "Dec");
    }

    #[test]
    fn determinism_for_fixed_inputs() {
        let mut counts = HashMap::new();
        counts.insert(date("2025-05-05"), 2);

        let a = grid(2025, &counts, "2025-06-01");
        let b = grid(2025, &counts, "2025-06-01");
        assert_eq!(a.total_contributions, b.total_contributions);
        assert_eq!(a.weeks.len(), b.weeks.len());
        assert_eq!(a.months.len(), b.months.len());
    }
}
