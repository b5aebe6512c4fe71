pub mod builder;
pub mod github_client;
mod handler;
mod headers;
pub mod response;

use self::{builder::BuilderExecutor, github_client::GithubClient, response::PullRequest};
use crate::config::Config;
use anyhow::{Context, Result};
use thiserror::Error;

const SEARCH_PAGE_SIZE: u8 = 50;
const PULL_REQUEST_PAGE_SIZE: u8 = 20;
const OPEN_STATE: &str = "open";

#[derive(Debug, Error)]
pub enum Error {
    #[error("no repositories found for query `{query}`")]
    NoRepositoriesFound { query: String },
}

/// Collects the open pull requests of every repository matching the
/// configured query, in search order. A repository whose pull requests
/// cannot be listed is skipped.
pub async fn open_pull_requests(
    client: &GithubClient,
    config: &Config,
) -> Result<Vec<PullRequest>> {
    let repositories = client
        .search()
        .repositories(&config.repo_query)
        .user(&config.user)
        .per_page(SEARCH_PAGE_SIZE)
        .execute()
        .await
        .context("Couldn't fetch repositories from git")?;

    log::info!("found {} repositories", repositories.len());

    if repositories.is_empty() {
        return Err(Error::NoRepositoriesFound {
            query: config.repo_query.to_owned(),
        }
        .into());
    }

    let mut pull_requests = Vec::new();

    for repository in &repositories {
        let owner = if config.user.trim().is_empty() {
            repository.owner_login().unwrap_or_default()
        } else {
            config.user.as_str()
        };

        let listed = client
            .repo(owner, &repository.name)
            .pull_requests()
            .list()
            .state(OPEN_STATE)
            .per_page(PULL_REQUEST_PAGE_SIZE)
            .execute()
            .await;

        match listed {
            Ok(mut listed) => {
                log::debug!("{} open pull requests in {}", listed.len(), repository.name);
                pull_requests.append(&mut listed);
            }
            Err(err) => log::warn!("skipping repository {}: {:#}", repository.name, err),
        }
    }

    log::info!("found {} open pull requests", pull_requests.len());

    Ok(pull_requests)
}
