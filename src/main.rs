use std::sync::Arc;

mod compute;
mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;
mod validation;

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::Config::load_from(&config_path)?;

    logger::init(&cfg)?;

    // Worker threads follow `server.workers`, defaulting to one per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let bound_addr = listener.local_addr()?;

    logger::log_server_start(&bound_addr, &cfg);
    logger::log_effective_config(&cfg);

    let state = Arc::new(config::AppState::new(cfg));
    server::start_server_loop(listener, state, server::shutdown_signal()).await;

    Ok(())
}
