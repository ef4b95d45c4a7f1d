//! Subcommand implementations.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use focos_cli_utils::{IndicatifProgress, MultiProgress};
use focos_report::{mean_line, record_line};
use focos_server::{build_notifier, run_cycle};
use focos_source::pipeline::read_monthly_stats;
use focos_source::{FocosConfig, HttpFetcher, today};

/// `focos run`
pub async fn run(
    multi: &MultiProgress,
    send: bool,
    regions: &[String],
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ids: Vec<&str> = regions.iter().map(String::as_str).collect();
    let config = FocosConfig::load()?.with_regions(&ids)?;
    let date = date.unwrap_or_else(|| today(&config));

    let fetcher = HttpFetcher::new(config.request_timeout())?;
    let notifier = build_notifier(&config, send)?;
    let progress = IndicatifProgress::regions_bar(multi, "Collecting regions");

    log::info!(
        "Reporting on {date} for {} region(s)",
        config.regions.len()
    );
    let start = Instant::now();

    let bulletin = run_cycle(&config, &fetcher, notifier.as_ref(), date, &progress).await?;

    println!("{}", bulletin.subject);
    print!("{}", bulletin.text);

    if send {
        log::info!("Bulletin sent in {:.1}s", start.elapsed().as_secs_f64());
    } else {
        log::info!("Dry run complete; pass --send to email the bulletin");
    }

    Ok(())
}

/// `focos regions`
pub fn regions() -> Result<(), Box<dyn std::error::Error>> {
    let config = FocosConfig::load()?;

    for region in &config.regions {
        println!("{:<16} {}", region.id, region.name);
    }

    Ok(())
}

/// `focos stats`
pub fn stats(file: &Path, month: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = FocosConfig::load()?;
    let markup = std::fs::read_to_string(file)?;

    let stats = read_monthly_stats(
        &markup,
        &config.historical,
        &config.vocabulary(),
        month,
    );

    println!("{}", mean_line(&stats.mean));
    println!("{}", record_line(&stats.record));

    Ok(())
}
