pub mod list_pull_requests_builder;
pub mod search_repositories_builder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
