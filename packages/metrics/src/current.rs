//! Counts from the current-period grid.
//!
//! Row 0 is the cumulative series for the same month of the previous year
//! and row 1 the series for the current month. Column `d` holds day `d + 1`;
//! the column equal to the month's length holds the month-end total.

use chrono::{Datelike as _, NaiveDate};
use focos_grid::{Grid, lookup};
use focos_grid_models::CellAddress;
use focos_metrics_models::{CurrentPeriod, Month};

/// Row of the previous year's series.
pub const PRIOR_YEAR_ROW: u32 = 0;

/// Row of the current year's series.
pub const CURRENT_YEAR_ROW: u32 = 1;

/// Reads today's, month-to-date and last year's same-month counts.
#[must_use]
pub fn current_period(grid: &(impl Grid + ?Sized), today: NaiveDate) -> CurrentPeriod {
    let total_col = days_in_month(today);

    CurrentPeriod {
        last_24h: lookup(grid, CellAddress::new(CURRENT_YEAR_ROW, today.day0())),
        month_to_date: lookup(grid, CellAddress::new(CURRENT_YEAR_ROW, total_col)),
        same_month_last_year: lookup(grid, CellAddress::new(PRIOR_YEAR_ROW, total_col)),
    }
}

/// Calendar month of `date`.
#[must_use]
pub fn month_of(date: NaiveDate) -> Month {
    Month::ALL[date.month0() as usize]
}

/// Number of days in the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    (29..=31)
        .rev()
        .find(|&day| date.with_day(day).is_some())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use focos_grid::MemoryGrid;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_days_in_month() {
        assert_eq!(days_in_month(date(2025, 1, 15)), 31);
        assert_eq!(days_in_month(date(2025, 4, 1)), 30);
        assert_eq!(days_in_month(date(2025, 2, 28)), 28);
        assert_eq!(days_in_month(date(2024, 2, 3)), 29);
        assert_eq!(days_in_month(date(1900, 2, 3)), 28);
    }

    #[test]
    fn maps_dates_to_months() {
        assert_eq!(month_of(date(2025, 1, 31)), Month::January);
        assert_eq!(month_of(date(2025, 6, 1)), Month::June);
        assert_eq!(month_of(date(2025, 12, 31)), Month::December);
    }

    #[test]
    fn reads_current_period_counts() {
        let grid = MemoryGrid::new()
            .with_cell(CellAddress::new(1, 9), "37")
            .with_cell(CellAddress::new(1, 31), "912")
            .with_cell(CellAddress::new(0, 31), "1480");

        let period = current_period(&grid, date(2025, 8, 10));

        assert_eq!(
            period,
            CurrentPeriod {
                last_24h: Some(37),
                month_to_date: Some(912),
                same_month_last_year: Some(1480),
            }
        );
    }

    #[test]
    fn total_column_follows_month_length() {
        let grid = MemoryGrid::new()
            .with_cell(CellAddress::new(1, 29), "999")
            .with_cell(CellAddress::new(1, 30), "300")
            .with_cell(CellAddress::new(1, 31), "777");

        let period = current_period(&grid, date(2025, 9, 1));
        assert_eq!(period.month_to_date, Some(300));

        let period = current_period(&grid, date(2025, 10, 1));
        assert_eq!(period.month_to_date, Some(777));
    }

    #[test]
    fn first_day_reads_column_zero() {
        let grid = MemoryGrid::new().with_cell(CellAddress::new(1, 0), "4");
        assert_eq!(current_period(&grid, date(2025, 3, 1)).last_24h, Some(4));
    }

    #[test]
    fn missing_cells_stay_absent() {
        let grid = MemoryGrid::new()
            .with_cell(CellAddress::new(1, 31), "-")
            .with_cell(CellAddress::new(0, 31), "n/d");
        assert_eq!(
            current_period(&grid, date(2025, 7, 4)),
            CurrentPeriod::default()
        );
    }
}
