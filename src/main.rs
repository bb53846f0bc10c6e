mod cli;
mod error;
mod image;
mod runtime;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, run};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "RMIMG_LOG";

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
