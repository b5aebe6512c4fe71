mod config;
mod github;
mod http;
mod logger;
mod slack;

use anyhow::{Context, Result};
use chrono::Utc;
use config::Config;
use github::github_client::GithubClient;

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialise logger: {:#}", err);
    }

    if let Err(err) = run(std::env::args().nth(1)).await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(input: Option<String>) -> Result<()> {
    let config = Config::load(input).await.context("Cannot load config")?;

    let client = GithubClient::new(&config).context("Cannot build the github client")?;

    let pull_requests = github::open_pull_requests(&client, &config).await?;

    let message = slack::message::build_message(&pull_requests, Utc::now());

    slack::notify(&config.webhook_url, &config.channel, &message)
        .await
        .context("Couldn't post to slack")?;

    Ok(())
}
