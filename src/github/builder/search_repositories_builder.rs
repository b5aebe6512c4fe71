use super::BuilderExecutor;
use crate::github::{github_client::GithubClient, response::Repository};
use anyhow::Result;

pub struct SearchRepositoriesBuilder<'a> {
    client: &'a GithubClient,
    pub query: String,
    pub user: Option<String>,
    pub per_page: Option<u8>,
}

impl<'a> SearchRepositoriesBuilder<'a> {
    pub fn new(client: &'a GithubClient, query: impl Into<String>) -> Self {
        SearchRepositoriesBuilder {
            client,
            query: query.into(),
            user: None,
            per_page: None,
        }
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        let user = user.into();
        self.user = if user.trim().is_empty() {
            None
        } else {
            Some(user)
        };
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Search qualifiers appended to the free text query. Archived
    /// repositories are always left out.
    pub fn compose_query(&self) -> String {
        let mut query = self.query.trim().to_owned();

        if let Some(user) = &self.user {
            query.push_str(&format!(" user:{}", user));
        }

        query.push_str(" archived:false");
        query
    }
}

impl BuilderExecutor for SearchRepositoriesBuilder<'_> {
    type Output = Vec<Repository>;

    async fn execute(self) -> Result<Self::Output> {
        let query = self.compose_query();
        log::debug!("searching repositories with `{}`", query);

        self.client
            .search_repositories(&query, self.per_page)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Result<GithubClient> {
        GithubClient::with_api_url("https://api.github.com/", "token")
    }

    #[test]
    fn should_restrict_query_to_user_and_unarchived() -> Result<()> {
        let client = client()?;
        let builder = SearchRepositoriesBuilder::new(&client, "service").user("acme");

        assert_eq!(builder.compose_query(), "service user:acme archived:false");
        Ok(())
    }

    #[test]
    fn should_skip_user_qualifier_when_user_is_blank() -> Result<()> {
        let client = client()?;
        let builder = SearchRepositoriesBuilder::new(&client, "service").user(" ");

        assert_eq!(builder.compose_query(), "service archived:false");
        Ok(())
    }

    #[test]
    fn should_send_page_size_only_when_set() -> Result<()> {
        let client = client()?;

        let builder = SearchRepositoriesBuilder::new(&client, "service");
        assert_eq!(builder.per_page, None);

        let builder = builder.per_page(50);
        assert_eq!(builder.per_page, Some(50));
        Ok(())
    }
}
