use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

impl Repository {
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().map(|owner| owner.login.as_str())
    }
}
