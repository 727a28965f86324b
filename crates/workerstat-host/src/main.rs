//! workerstat host
//!
//! Runs a simulated worker pool with a listener attached and prints the last
//! reported metrics.
//! - config: first CLI argument, default `workerstat.yaml`
//! - log filter: `RUST_LOG`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use workerstat_core::error::Result;
use workerstat_host::config::{self, DumpFormat};
use workerstat_host::{app_state::AppState, host, listener};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "workerstat.yaml".into());
    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "workerstat-host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let dump = cfg.monitor.dump;

    let report = host::run(AppState::new(cfg)).await?;

    match dump {
        DumpFormat::None => {}
        DumpFormat::Text => print!("{}", listener::render_text(&report.last)),
        DumpFormat::Json => println!("{}", listener::render_json(&report.last)?),
    }
    Ok(())
}
