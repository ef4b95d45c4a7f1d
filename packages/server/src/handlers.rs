//! HTTP handler functions for the focos API.

use actix_web::{HttpResponse, web};
use focos_server_models::{ApiError, ApiHealth, ApiRegionMetrics, RegionQueryParams};
use focos_source::progress::null_progress;
use focos_source::{FocosConfig, collect_all, today};

use crate::{AppState, CycleError, run_cycle};

/// Body returned once the bulletin has been sent.
pub const SENT_MESSAGE: &str = "Email sent successfully!";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/metrics`
///
/// Collects the metrics of the requested regions without sending anything.
pub async fn metrics(
    state: web::Data<AppState>,
    params: web::Query<RegionQueryParams>,
) -> HttpResponse {
    let config = match selected_config(&state, &params) {
        Ok(config) => config,
        Err(resp) => return resp,
    };

    let today = today(&config);
    match collect_all(&config, state.fetcher.as_ref(), today, &null_progress()).await {
        Ok(metrics) => {
            let body: Vec<ApiRegionMetrics> =
                metrics.into_iter().map(ApiRegionMetrics::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(e) => {
            log::error!("Metrics collection failed: {e}");
            HttpResponse::BadGateway().json(ApiError::new(e))
        }
    }
}

/// `GET /biomas`
///
/// Runs a full cycle and sends the bulletin.
pub async fn biomas(
    state: web::Data<AppState>,
    params: web::Query<RegionQueryParams>,
) -> HttpResponse {
    let config = match selected_config(&state, &params) {
        Ok(config) => config,
        Err(resp) => return resp,
    };

    let today = today(&config);
    let result = run_cycle(
        &config,
        state.fetcher.as_ref(),
        state.notifier.as_ref(),
        today,
        &null_progress(),
    )
    .await;

    match result {
        Ok(_) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(SENT_MESSAGE),
        Err(CycleError::Source(e)) => {
            log::error!("Bulletin cycle failed: {e}");
            HttpResponse::BadGateway().json(ApiError::new(e))
        }
        Err(CycleError::Notify(e)) => {
            log::error!("Bulletin delivery failed: {e}");
            HttpResponse::InternalServerError().json(ApiError::new(e))
        }
    }
}

fn selected_config(
    state: &AppState,
    params: &RegionQueryParams,
) -> Result<FocosConfig, HttpResponse> {
    state
        .config
        .clone()
        .with_regions(&params.region_ids())
        .map_err(|e| HttpResponse::BadRequest().json(ApiError::new(e)))
}
