use crate::http::request_builder::{RequestBuilder, RequestType};
use reqwest::header::{ACCEPT, USER_AGENT};

pub const API_VERSION: &str = "2022-11-28";

pub trait Headers {
    fn default_headers(self, token: &str) -> Self;
}

impl<T> Headers for RequestBuilder<T>
where
    T: RequestType,
{
    fn default_headers(self, token: &str) -> Self {
        self.bearer_auth(token)
            .header(ACCEPT.as_str(), "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT.as_str(), env!("CARGO_PKG_NAME"))
    }
}
