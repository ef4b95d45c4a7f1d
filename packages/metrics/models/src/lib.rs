#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Month vocabulary, historical grid layout and report types for hotspot
//! metrics.
//!
//! The report types distinguish an available figure from
//! [`NOT_AVAILABLE`] at the type level; a missing count is never
//! represented as zero.

pub mod month;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use month::{Month, MonthLocale, MonthVocabulary};

/// Text rendered for any figure that could not be derived.
pub const NOT_AVAILABLE: &str = "not available";

/// Calendar year of the first row of the historical grid.
///
/// Row `r` of the historical grid holds the monthly totals of
/// `FIRST_YEAR + r`. This mapping is fixed by the data source and is never
/// recomputed from the table contents.
pub const FIRST_YEAR: i32 = 1999;

/// Structural layout of the historical grid.
///
/// Both values drift between revisions of the published table (27 to 29
/// year rows, mean row 28 to 30), so they are configuration rather than
/// constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistoricalLayout {
    /// Number of year rows scanned for the record, starting at row 0.
    #[serde(default = "HistoricalLayout::default_year_rows")]
    pub year_rows: u32,
    /// Rows holding the pre-computed monthly mean. Every numeric cell found
    /// in these rows is a mean candidate.
    #[serde(default = "HistoricalLayout::default_mean_rows")]
    pub mean_rows: Vec<u32>,
}

impl HistoricalLayout {
    const fn default_year_rows() -> u32 {
        29
    }

    fn default_mean_rows() -> Vec<u32> {
        vec![30]
    }
}

impl Default for HistoricalLayout {
    fn default() -> Self {
        Self {
            year_rows: Self::default_year_rows(),
            mean_rows: Self::default_mean_rows(),
        }
    }
}

/// Historical mean hotspot count for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MeanReport {
    /// Floored mean of the numeric mean candidates.
    Available {
        /// Hotspot count.
        hotspots: u64,
    },
    /// No numeric mean candidate existed.
    NotAvailable,
}

impl MeanReport {
    /// The mean, if available.
    #[must_use]
    pub const fn hotspots(&self) -> Option<u64> {
        match self {
            Self::Available { hotspots } => Some(*hotspots),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for MeanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { hotspots } => {
                write!(f, "Average for the month - {hotspots} hotspots")
            }
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Historical record (maximum) hotspot count for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RecordReport {
    /// Highest monthly count and the year it is attributed to.
    Available {
        /// Hotspot count.
        hotspots: u64,
        /// Calendar year of the record.
        year: i32,
    },
    /// No numeric value existed in any year row.
    NotAvailable,
}

impl RecordReport {
    /// The record count and its year, if available.
    #[must_use]
    pub const fn hotspots_and_year(&self) -> Option<(u64, i32)> {
        match self {
            Self::Available { hotspots, year } => Some((*hotspots, *year)),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for RecordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { hotspots, year } => write!(
                f,
                "Record for the month - {hotspots} hotspots (in year {year})"
            ),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Long-run statistics for one month of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// Historical monthly mean.
    pub mean: MeanReport,
    /// Historical monthly record.
    pub record: RecordReport,
}

impl MonthlyStats {
    /// Both figures unavailable.
    pub const NOT_AVAILABLE: Self = Self {
        mean: MeanReport::NotAvailable,
        record: RecordReport::NotAvailable,
    };
}

/// Counts read from the current-period grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPeriod {
    /// Hotspots detected today.
    pub last_24h: Option<u64>,
    /// Cumulative hotspots in the current month.
    pub month_to_date: Option<u64>,
    /// Total hotspots in the same month of the previous year.
    pub same_month_last_year: Option<u64>,
}

/// Every metric derived for one region in one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMetrics {
    /// Region identifier used in source URLs (e.g. `"amazonia"`).
    pub region_id: String,
    /// Display name (e.g. `"AMAZÔNIA"`).
    pub region_name: String,
    /// Month the statistics refer to.
    pub month: Month,
    /// Current-period counts.
    pub current: CurrentPeriod,
    /// Historical mean and record.
    pub stats: MonthlyStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_available_reports() {
        assert_eq!(
            MeanReport::Available { hotspots: 20 }.to_string(),
            "Average for the month - 20 hotspots"
        );
        assert_eq!(
            RecordReport::Available {
                hotspots: 7415,
                year: 2001,
            }
            .to_string(),
            "Record for the month - 7415 hotspots (in year 2001)"
        );
    }

    #[test]
    fn renders_missing_reports() {
        assert_eq!(MeanReport::NotAvailable.to_string(), "not available");
        assert_eq!(RecordReport::NotAvailable.to_string(), "not available");
    }

    #[test]
    fn default_layout_matches_latest_revision() {
        let layout = HistoricalLayout::default();
        assert_eq!(layout.year_rows, 29);
        assert_eq!(layout.mean_rows, vec![30]);
    }

    #[test]
    fn serializes_reports_with_status_tag() {
        let json = serde_json::to_value(MonthlyStats {
            mean: MeanReport::Available { hotspots: 12 },
            record: RecordReport::NotAvailable,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mean": { "status": "available", "hotspots": 12 },
                "record": { "status": "notAvailable" },
            })
        );
    }
}
