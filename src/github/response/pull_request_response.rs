use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub head: Head,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    /// Absent when the fork backing the pull request was deleted.
    pub repo: Option<HeadRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRepository {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
}

impl PullRequest {
    pub fn head_repo_name(&self) -> &str {
        self.head
            .repo
            .as_ref()
            .map(|repo| repo.name.as_str())
            .unwrap_or_default()
    }

    pub fn author_login(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.login.as_str())
            .unwrap_or_default()
    }

    pub fn author_url(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.html_url.as_str())
            .unwrap_or_default()
    }
}
