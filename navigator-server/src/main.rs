use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use navigator_server::cache::NetworkStore;
use navigator_server::cli::Cli;
use navigator_server::config::ServerConfig;
use navigator_server::loader::load_network;
use navigator_server::planner::{Directions, Planner, PlannerConfig};
use navigator_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for directions
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match cli.network {
        Some(path) => print_directions(&path, &config.planner),
        None => serve(config).await,
    }
}

/// Command-line mode: plan over one description file and print directions.
fn print_directions(path: &Path, planner: &PlannerConfig) -> ExitCode {
    let network = match load_network(path) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %path.display(), error = %e, "cannot load network");
            return ExitCode::FAILURE;
        }
    };

    match Planner::new(planner).plan(&network) {
        Ok(result) => {
            print!("{}", Directions(&result.itinerary));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "cannot plan route");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServerConfig) -> ExitCode {
    let store = NetworkStore::new(&config.network_dir, &config.cache);
    let state = AppState::new(store, config.planner.clone());
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "cannot bind");
            return ExitCode::FAILURE;
        }
    };

    info!(
        addr = %config.addr,
        networks = %config.network_dir.display(),
        "campus navigator listening"
    );
    info!("  GET  /health                 - Health check");
    info!("  GET  /networks               - List stored networks");
    info!("  GET  /networks/:name/route   - Directions for a stored network");
    info!("  POST /route                  - Directions for a posted network");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
