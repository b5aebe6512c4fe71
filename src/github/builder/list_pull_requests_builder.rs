use super::BuilderExecutor;
use crate::github::{github_client::GithubClient, response::PullRequest};
use anyhow::Result;

const DEFAULT_STATE: &str = "open";

pub struct ListPullRequestsBuilder<'a> {
    client: &'a GithubClient,
    pub owner: String,
    pub repo: String,
    pub state: String,
    pub per_page: Option<u8>,
}

impl<'a> ListPullRequestsBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        ListPullRequestsBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            state: DEFAULT_STATE.to_owned(),
            per_page: None,
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

impl BuilderExecutor for ListPullRequestsBuilder<'_> {
    type Output = Vec<PullRequest>;

    async fn execute(self) -> Result<Self::Output> {
        self.client
            .list_pull_requests(&self.owner, &self.repo, &self.state, self.per_page)
            .await
    }
}
