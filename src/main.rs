//! Huesmith binary entry point

use clap::Parser;
use huesmith_cli::{Cli, Console, route};

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = route(cli).await {
        Console::new(false).error(&e.to_string());
        std::process::exit(1);
    }
}
