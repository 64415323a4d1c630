use std::process::ExitCode;
use std::sync::Arc;

use isoserve::config::{AppState, Config};
use isoserve::error::ServerError;
use isoserve::{logger, server};

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn start() -> Result<(), ServerError> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), ServerError> {
    let addr = cfg.socket_addr()?;
    let public_url = cfg.public_url();
    let state = Arc::new(AppState::new(cfg)?);

    // The listener lives for the rest of the process
    let listener = server::create_listener(addr)?;
    logger::log_server_start(&public_url);

    server::run(listener, state).await;
    Ok(())
}
