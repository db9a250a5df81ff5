//! Dummy backend: answers every request on port 5000 with a fixed
//! Lorem ipsum body after ~100ms.
//!
//! Takes no arguments. Exits with status 1 if the port cannot be bound.

use dummy_core::{Server, ServerConfig};
use mimalloc::MiMalloc;
use std::process::ExitCode;

mod logging;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    logging::init_logger();

    match run(ServerConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "dummy stopped");
            eprintln!("dummy: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: ServerConfig) -> dummy_core::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = Server::bind(&config).await?;
        println!("Rust dummy is listening on :{}", config.port);
        tracing::info!(addr = %config.address(), workers = config.workers, "serving");
        server.serve().await
    })
}
