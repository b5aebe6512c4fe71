use crate::github::{
    builder::search_repositories_builder::SearchRepositoriesBuilder, github_client::GithubClient,
};

pub struct SearchHandler<'a> {
    client: &'a GithubClient,
}

impl<'a> SearchHandler<'a> {
    pub fn new(client: &'a GithubClient) -> Self {
        SearchHandler { client }
    }

    pub fn repositories(&self, query: impl Into<String>) -> SearchRepositoriesBuilder<'a> {
        SearchRepositoriesBuilder::new(self.client, query)
    }
}
