pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod loader;
pub mod pagination;
pub mod query;
pub mod scaffold;
pub mod site;
pub mod source;
pub mod tags;
pub mod theme;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use cli::Cli;
use config::Config;

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(
            EnvFilter::try_from_env("DATABLOG_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match Config::load(&cli.config) {
        Ok(config) => cli::dispatch(cli.command, &config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(%e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
