#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the focos hotspot bulletin.
//!
//! ```text
//! focos run [--send] [--regions amazonia,cerrado] [--date 2025-08-14]
//! focos regions
//! focos stats --file historico.html --month agosto
//! focos serve [--dry-run]
//! ```
//!
//! Configuration is read from the file named by `FOCOS_CONFIG`, or the
//! built-in defaults. Uses `indicatif-log-bridge` (via
//! [`focos_cli_utils::init_logger`]) so that log lines and the progress
//! bar never fight for the terminal.

mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "focos", about = "Wildfire hotspot bulletin toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect metrics for every region and compose the bulletin
    Run {
        /// Email the bulletin through Brevo instead of only printing it
        #[arg(long)]
        send: bool,
        /// Comma-separated region ids (default: all configured regions)
        #[arg(long, value_delimiter = ',')]
        regions: Vec<String>,
        /// Date to report on, as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the configured regions
    Regions,
    /// Compute the monthly statistics of a saved historical page
    Stats {
        /// Saved historical page
        #[arg(long)]
        file: PathBuf,
        /// Month label in the configured locale
        #[arg(long)]
        month: String,
    },
    /// Start the HTTP server
    Serve {
        /// Log bulletins instead of emailing them
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = focos_cli_utils::init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            send,
            regions,
            date,
        } => commands::run(&multi, send, &regions, date).await?,
        Commands::Regions => commands::regions()?,
        Commands::Stats { file, month } => commands::stats(&file, &month)?,
        Commands::Serve { dry_run } => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(focos_server::run_server(dry_run))
            })
            .await??;
        }
    }

    Ok(())
}
