pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::{Client, ClientRequestBuilder};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed with status {status}: {message}")]
    GenericResponseError { status: u16, message: String },
    #[error("Invalid header `{name}`")]
    InvalidHeaderError { name: String },
    #[error("Failed to serialize request body")]
    SerializeBodyError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to build http client")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
}
