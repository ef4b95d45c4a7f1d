#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Standalone entry point for the focos server.
//!
//! Set `FOCOS_DRY_RUN=1` to log bulletins instead of emailing them.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let dry_run = std::env::var("FOCOS_DRY_RUN").is_ok_and(|v| v == "1" || v == "true");

    focos_server::run_server(dry_run).await
}
