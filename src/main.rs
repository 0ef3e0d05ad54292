#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

use std::io;
use std::process;

use anyhow::Error;
use tracing_subscriber::EnvFilter;

use roll20_deploy::application::cli;

fn handle_error(err: Error) {
    eprintln!("roll20-deploy failed: {err}");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| return EnvFilter::new("roll20_deploy=info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = cli::parse().await {
        handle_error(err);
    }
}
