use super::{
    request::{Body, HttpRequest},
    request_builder::{Get, InitBuilder, Post, RequestBuilder},
    Error,
};
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub fn with_timeout(timeout: Duration) -> Result<Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(Client(client))
    }

    pub async fn send(&self, request: HttpRequest) -> Result<reqwest::Response, Error> {
        log::debug!("{:?} {}", request.method, request.url);
        let mut builder = self.0.request(request.method.into(), request.url);

        builder = builder.headers(request.headers.try_into()?);

        if let Some(Body::Json(json)) = request.body {
            builder = builder.json(&json);
        }

        let request = builder
            .build()
            .map_err(|cause| Error::SendRequestError { cause })?;

        self.0
            .execute(request)
            .await
            .map_err(|cause| Error::SendRequestError { cause })
    }
}

pub trait ClientRequestBuilder {
    fn get(self, url: Url) -> RequestBuilder<Get>;
    fn post(self, url: Url) -> RequestBuilder<Post>;
}

impl ClientRequestBuilder for Client {
    fn get(self, url: Url) -> RequestBuilder<Get> {
        InitBuilder::get(self, url)
    }

    fn post(self, url: Url) -> RequestBuilder<Post> {
        InitBuilder::post(self, url)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
