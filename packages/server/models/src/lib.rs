#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the focos server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the metrics types so the wire contract can evolve independently.

use focos_metrics_models::{Month, RegionMetrics};
use serde::{Deserialize, Serialize};

/// One region's metrics as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegionMetrics {
    /// Region identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Calendar month the statistics refer to.
    pub month: Month,
    /// Hotspots in the last 24 hours.
    pub last_24h: Option<u64>,
    /// Hotspots so far this month.
    pub month_to_date: Option<u64>,
    /// Hotspots in the same month last year.
    pub same_month_last_year: Option<u64>,
    /// Historical mean for the month.
    pub mean: Option<u64>,
    /// Historical record for the month.
    pub record: Option<u64>,
    /// Year of the record.
    pub record_year: Option<i32>,
}

impl From<RegionMetrics> for ApiRegionMetrics {
    fn from(metrics: RegionMetrics) -> Self {
        let (record, record_year) = metrics.stats.record.hotspots_and_year().unzip();

        Self {
            id: metrics.region_id,
            name: metrics.region_name,
            month: metrics.month,
            last_24h: metrics.current.last_24h,
            month_to_date: metrics.current.month_to_date,
            same_month_last_year: metrics.current.same_month_last_year,
            mean: metrics.stats.mean.hotspots(),
            record,
            record_year,
        }
    }
}

/// Query parameters for the metrics and dispatch endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionQueryParams {
    /// Comma-separated region ids; all configured regions when absent.
    pub regions: Option<String>,
}

impl RegionQueryParams {
    /// The requested region ids, in request order.
    #[must_use]
    pub fn region_ids(&self) -> Vec<&str> {
        self.regions
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Error body returned on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Wraps the display text of `error`.
    #[must_use]
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use focos_metrics_models::{CurrentPeriod, MeanReport, MonthlyStats, RecordReport};

    use super::*;

    #[test]
    fn converts_region_metrics() {
        let api = ApiRegionMetrics::from(RegionMetrics {
            region_id: "cerrado".to_string(),
            region_name: "CERRADO".to_string(),
            month: Month::September,
            current: CurrentPeriod {
                last_24h: Some(5),
                month_to_date: None,
                same_month_last_year: Some(900),
            },
            stats: MonthlyStats {
                mean: MeanReport::Available { hotspots: 700 },
                record: RecordReport::Available {
                    hotspots: 2000,
                    year: 2007,
                },
            },
        });

        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "cerrado",
                "name": "CERRADO",
                "month": "september",
                "last24h": 5,
                "monthToDate": null,
                "sameMonthLastYear": 900,
                "mean": 700,
                "record": 2000,
                "recordYear": 2007,
            })
        );
    }

    #[test]
    fn unavailable_stats_are_null() {
        let api = ApiRegionMetrics::from(RegionMetrics {
            region_id: "pampa".to_string(),
            region_name: "PAMPA".to_string(),
            month: Month::May,
            current: CurrentPeriod::default(),
            stats: MonthlyStats::NOT_AVAILABLE,
        });
        assert_eq!(api.mean, None);
        assert_eq!(api.record, None);
        assert_eq!(api.record_year, None);
    }

    #[test]
    fn error_body_carries_message() {
        let body = serde_json::to_value(ApiError::new("Unknown region: x")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Unknown region: x" }));
    }

    #[test]
    fn splits_region_ids() {
        let params = RegionQueryParams {
            regions: Some(" cerrado,,pampa ".to_string()),
        };
        assert_eq!(params.region_ids(), vec!["cerrado", "pampa"]);
        assert!(RegionQueryParams::default().region_ids().is_empty());
    }
}
