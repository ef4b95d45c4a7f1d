#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web trigger and API server for the focos bulletin.
//!
//! `GET /biomas` runs a full cycle and emails the bulletin. The `/api`
//! scope exposes the collected metrics as JSON and a health check.

mod cycle;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use focos_notify::brevo::BrevoNotifier;
use focos_notify::{LogNotifier, Mailbox, Notifier, NotifyError};
use focos_source::{FocosConfig, HttpFetcher, PageFetcher};

pub use cycle::{CycleError, run_cycle};

/// Shared application state.
pub struct AppState {
    /// Loaded configuration.
    pub config: FocosConfig,
    /// Source of the published tables.
    pub fetcher: Arc<dyn PageFetcher>,
    /// Bulletin delivery.
    pub notifier: Arc<dyn Notifier>,
}

/// Builds the notifier for `config`.
///
/// With `send` the bulletin goes out through Brevo, configured from the
/// environment; otherwise it is only logged.
///
/// # Errors
///
/// Returns [`NotifyError`] if `send` is set and Brevo is not configured.
pub fn build_notifier(
    config: &FocosConfig,
    send: bool,
) -> Result<Arc<dyn Notifier>, NotifyError> {
    if !send {
        return Ok(Arc::new(LogNotifier));
    }

    let sender = Mailbox {
        email: config.email.sender_email.clone(),
        name: Some(config.email.sender_name.clone()),
    };

    Ok(Arc::new(BrevoNotifier::from_env(
        sender,
        config.email.recipients.clone(),
        config.request_timeout(),
    )?))
}

/// Registers every route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/biomas", web::get().to(handlers::biomas)).service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/metrics", web::get().to(handlers::metrics)),
    );
}

/// Starts the focos server.
///
/// Loads the configuration, builds the HTTP fetcher and the notifier, and
/// starts the Actix-Web HTTP server on `BIND_ADDR`:`PORT`. With `dry_run`
/// bulletins are logged instead of emailed.
///
/// # Errors
///
/// Returns an `std::io::Result` error if configuration fails, or if the
/// HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(dry_run: bool) -> std::io::Result<()> {
    let config = FocosConfig::load().map_err(std::io::Error::other)?;
    log::info!("Loaded {} region(s)", config.regions.len());

    let fetcher = HttpFetcher::new(config.request_timeout()).map_err(std::io::Error::other)?;
    let notifier = build_notifier(&config, !dry_run).map_err(std::io::Error::other)?;
    if dry_run {
        log::warn!("Dry run: bulletins will be logged, not emailed");
    }

    let state = web::Data::new(AppState {
        config,
        fetcher: Arc::new(fetcher),
        notifier,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
