//! Per-region collection cycle.
//!
//! For each configured region the current-period table is fetched and
//! read, then the historical table is fetched and the monthly statistics
//! computed. Regions are processed one after another in configured order.
//! The first fetch failure aborts the whole cycle so that a bulletin is
//! never built from a partially-populated record.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use focos_grid::HtmlGrid;
use focos_metrics::{current_period, month_of, monthly_stats};
use focos_metrics_models::{
    CurrentPeriod, HistoricalLayout, MonthVocabulary, MonthlyStats, RegionMetrics,
};

use crate::SourceError;
use crate::config::{FocosConfig, RegionConfig};
use crate::fetch::PageFetcher;
use crate::progress::ProgressCallback;

/// Current date at the configured clock offset.
#[must_use]
pub fn today(config: &FocosConfig) -> NaiveDate {
    Utc::now().with_timezone(&config.utc_offset()).date_naive()
}

/// Collects the metrics of every configured region.
///
/// # Errors
///
/// Returns [`SourceError::Fetch`] for the first page that could not be
/// retrieved; no metrics are returned in that case.
pub async fn collect_all(
    config: &FocosConfig,
    fetcher: &dyn PageFetcher,
    today: NaiveDate,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<RegionMetrics>, SourceError> {
    progress.set_total(config.regions.len() as u64);

    let mut metrics = Vec::with_capacity(config.regions.len());
    for region in &config.regions {
        progress.set_message(format!("Collecting {}", region.name));
        metrics.push(collect_region(config, fetcher, region, today).await?);
        progress.inc(1);
    }

    log::info!("Collected metrics for {} region(s)", metrics.len());
    progress.finish(format!("Collected {} region(s)", metrics.len()));

    Ok(metrics)
}

/// Collects the metrics of a single region.
///
/// # Errors
///
/// Returns [`SourceError::Fetch`] if either table cannot be retrieved.
pub async fn collect_region(
    config: &FocosConfig,
    fetcher: &dyn PageFetcher,
    region: &RegionConfig,
    today: NaiveDate,
) -> Result<RegionMetrics, SourceError> {
    let vocabulary = config.vocabulary();
    let month = month_of(today);

    let markup = fetch_page(fetcher, region, config.current_period_url(region)).await?;
    let current = read_current_period(&markup, today);

    let markup = fetch_page(fetcher, region, config.historical_url(region)).await?;
    let stats = read_monthly_stats(
        &markup,
        &config.historical,
        &vocabulary,
        vocabulary.name(month),
    );

    log::debug!("[{}] {current:?} {stats:?}", region.id);

    Ok(RegionMetrics {
        region_id: region.id.clone(),
        region_name: region.name.clone(),
        month,
        current,
        stats,
    })
}

async fn fetch_page(
    fetcher: &dyn PageFetcher,
    region: &RegionConfig,
    url: String,
) -> Result<String, SourceError> {
    match fetcher.fetch_text(&url).await {
        Ok(markup) => Ok(markup),
        Err(source) => {
            log::error!("[{}] Failed to fetch {url}: {source}", region.id);
            Err(SourceError::Fetch {
                region: region.id.clone(),
                url,
                source,
            })
        }
    }
}

/// Reads the current-period counts out of a fetched page.
#[must_use]
pub fn read_current_period(markup: &str, today: NaiveDate) -> CurrentPeriod {
    current_period(&HtmlGrid::parse(markup), today)
}

/// Computes the monthly statistics out of a fetched historical page.
#[must_use]
pub fn read_monthly_stats(
    markup: &str,
    layout: &HistoricalLayout,
    vocabulary: &MonthVocabulary,
    month_name: &str,
) -> MonthlyStats {
    monthly_stats(&HtmlGrid::parse(markup), layout, vocabulary, month_name)
}
