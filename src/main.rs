//! xbot entrypoint.

#![forbid(unsafe_code)]

use std::path::Path;

use clap::{CommandFactory, Parser};

use xbot::cli::Cli;
use xbot::client::ApiClient;
use xbot::commands;
use xbot::config::{ApiConfig, Credentials};
use xbot::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up credentials from a local .env before reading the environment.
    dotenvy::dotenv().ok();

    logging::init(Path::new(logging::LOG_FILE))?;

    let cli = Cli::parse();

    let Some(action) = cli.action() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let credentials = Credentials::from_env()?;
    let client = ApiClient::new(&credentials, &ApiConfig::default())?;

    commands::run(action, &client).await;

    Ok(())
}
