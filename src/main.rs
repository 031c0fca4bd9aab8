use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;

mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod logging;
mod relay;
mod responses;
mod router;
mod storefront;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load configuration
    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    logging::init(&cfg.logging.level);

    // 2️⃣ Build the HTTP clients, prober and relay
    let app = match App::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("❌ HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = match cfg.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting server at http://{addr} ({} candidate endpoints)",
        cfg.probe.candidates.len()
    );

    let server = Server::bind(&addr).max_workers(cfg.server.max_workers);

    // 4️⃣ Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
