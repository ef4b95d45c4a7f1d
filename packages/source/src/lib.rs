#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hotspot table sources: configuration, page fetching and the per-region
//! collection cycle.
//!
//! A cycle fetches two published tables per region, hands them to the grid
//! and metrics crates, and returns one [`RegionMetrics`] per region in
//! configured order.

pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod progress;

pub use config::{ConfigError, EmailConfig, FocosConfig, RegionConfig};
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use focos_metrics_models::RegionMetrics;
pub use pipeline::{collect_all, collect_region, today};

/// Errors that can occur while collecting metrics.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A page could not be retrieved.
    #[error("Failed to fetch {url} for region {region}: {source}")]
    Fetch {
        /// Region being collected.
        region: String,
        /// URL that failed.
        url: String,
        /// Transport or status error.
        source: FetchError,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
