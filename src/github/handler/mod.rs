pub mod pull_request_handler;
pub mod repository_handler;
pub mod search_handler;
