//! Long-run monthly statistics from the historical grid.
//!
//! The historical grid has one row per year since [`FIRST_YEAR`] and one
//! column per month, plus one or more summary rows carrying the
//! pre-computed monthly mean.

use focos_grid::{Grid, lookup_all};
use focos_grid_models::CellAddress;
use focos_metrics_models::{
    FIRST_YEAR, HistoricalLayout, MeanReport, Month, MonthVocabulary, MonthlyStats, RecordReport,
};

/// Computes the mean and record reports for the month labelled
/// `month_name` in `vocabulary`.
///
/// An unrecognized label is not an error: both reports come back as not
/// available, whatever the grid holds.
#[must_use]
pub fn monthly_stats(
    grid: &(impl Grid + ?Sized),
    layout: &HistoricalLayout,
    vocabulary: &MonthVocabulary,
    month_name: &str,
) -> MonthlyStats {
    let Some(month) = vocabulary.resolve(month_name) else {
        log::debug!(
            "Month {month_name:?} is not in the {} vocabulary",
            vocabulary.locale()
        );
        return MonthlyStats::NOT_AVAILABLE;
    };

    monthly_stats_for(grid, layout, month)
}

/// Computes the mean and record reports for an already resolved month.
#[must_use]
pub fn monthly_stats_for(
    grid: &(impl Grid + ?Sized),
    layout: &HistoricalLayout,
    month: Month,
) -> MonthlyStats {
    MonthlyStats {
        mean: monthly_mean(grid, layout, month),
        record: monthly_record(grid, layout, month),
    }
}

/// Averages every numeric cell found in the mean rows at the month's
/// column. Table revisions differ in how many summary rows they emit, so
/// all candidates are collected rather than assuming exactly one.
fn monthly_mean(grid: &(impl Grid + ?Sized), layout: &HistoricalLayout, month: Month) -> MeanReport {
    let candidates: Vec<u64> = layout
        .mean_rows
        .iter()
        .flat_map(|&row| lookup_all(grid, CellAddress::new(row, month.index())))
        .collect();

    if candidates.is_empty() {
        return MeanReport::NotAvailable;
    }

    let sum: u128 = candidates.iter().copied().map(u128::from).sum();
    let count = candidates.len() as u128;

    MeanReport::Available {
        hotspots: u64::try_from(sum / count).unwrap_or(u64::MAX),
    }
}

/// Finds the highest numeric value across the year rows at the month's
/// column.
///
/// The year comes from the position of the maximum within the collected
/// scan, not from the row it was read from. Ties resolve to the earliest
/// position.
fn monthly_record(
    grid: &(impl Grid + ?Sized),
    layout: &HistoricalLayout,
    month: Month,
) -> RecordReport {
    let scan: Vec<u64> = (0..layout.year_rows)
        .flat_map(|row| lookup_all(grid, CellAddress::new(row, month.index())))
        .collect();

    let mut best: Option<(usize, u64)> = None;
    for (position, &value) in scan.iter().enumerate() {
        if best.is_none_or(|(_, max)| value > max) {
            best = Some((position, value));
        }
    }

    let Some((position, hotspots)) = best else {
        return RecordReport::NotAvailable;
    };

    RecordReport::Available {
        hotspots,
        year: record_year(position, month),
    }
}

/// Year attributed to the value at `position` in the record scan.
///
/// Compatibility shim: the published tables label the June-December
/// columns one calendar year earlier than the January-May columns, so the
/// derived year is shifted back by one from June onwards. This follows the
/// data source's year-boundary convention, not a calendar rule; re-verify
/// against the live tables before touching it.
#[must_use]
pub fn record_year(position: usize, month: Month) -> i32 {
    let offset = i32::try_from(position).unwrap_or(i32::MAX);
    let year = FIRST_YEAR.saturating_add(offset);

    if month >= Month::June { year - 1 } else { year }
}
