//! One complete bulletin cycle: collect, compose, deliver.

use std::sync::Arc;

use chrono::NaiveDate;
use focos_notify::{Notifier, NotifyError};
use focos_report::{Bulletin, compose};
use focos_source::progress::ProgressCallback;
use focos_source::{FocosConfig, PageFetcher, SourceError, collect_all};

/// Errors that can end a cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// Metrics could not be collected. Nothing was sent.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The bulletin was composed but not delivered.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Collects every configured region for `today`, composes the bulletin
/// and hands it to `notifier`.
///
/// # Errors
///
/// Returns [`CycleError::Source`] if any page could not be fetched, and
/// [`CycleError::Notify`] if delivery failed.
pub async fn run_cycle(
    config: &FocosConfig,
    fetcher: &dyn PageFetcher,
    notifier: &dyn Notifier,
    today: NaiveDate,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Bulletin, CycleError> {
    let metrics = collect_all(config, fetcher, today, progress).await?;
    let bulletin = compose(&config.email.subject, &metrics);

    notifier.send(&bulletin).await?;

    Ok(bulletin)
}
