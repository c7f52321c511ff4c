mod cli;
mod commands;
mod config;
mod github;
mod http;
mod logger;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ApiConfig;
use std::{io, time::Duration};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let api = ApiConfig::new(cli.api_url, Duration::from_secs(cli.timeout));
    log::debug!("using GitHub API at {}", api.api_url);

    let mut stdout = io::stdout().lock();
    commands::run(cli.command, &api, &mut stdout).await
}
