mod pull_request_response;
mod search_response;

pub use pull_request_response::PullRequest;
pub use search_response::Repository;
pub use search_response::SearchResponse;

#[cfg(test)]
pub use pull_request_response::{Head, HeadRepository, User};
