use crate::config::Config;
use crate::controller::Controller;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod dataset;
mod domain;
mod errors;
mod pipeline;
mod query;
mod responses;
mod router;
mod session;
mod spreadsheets;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Read settings from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(?config, "starting dashboard");

    // 2️⃣ Load the base table once; it is read-only from here on
    let store = match dataset::load_path(&config.data_path) {
        Ok(report) => report.store,
        Err(e) => {
            error!("failed to load listings: {e}");
            std::process::exit(1);
        }
    };
    if store.is_empty() {
        warn!(path = %config.data_path.display(), "listings file contains no usable rows");
    }

    let controller = Controller::new(Arc::new(store), config.max_sessions);

    // 3️⃣ Start the server
    let addr = config.bind_addr();
    info!("listening on http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &controller) {
        Ok(resp) => resp,
        Err(err) => responses::error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
