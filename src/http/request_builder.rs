use super::{
    client::Client,
    request::{Body, HttpRequest, Method},
    response::{AsyncFrom, Json, Raw, Response},
    Error,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

pub trait RequestType {}
pub struct Get;
pub struct Post;

impl RequestType for Get {}
impl RequestType for Post {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: Url) -> RequestBuilder<Get> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            request: HttpRequest::new(Method::Get, url),
        }
    }

    pub fn post(client: Client, url: Url) -> RequestBuilder<Post> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            request: HttpRequest::new(Method::Post, url),
        }
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    pub request: HttpRequest,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.header(key, value);
        self
    }

    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.request.bearer_auth(token);
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.request.query(key, &value.to_string());
        self
    }

    pub async fn send(self) -> Result<reqwest::Response, Error> {
        self.client.send(self.request).await
    }

    /// Sends the request and deserializes a 2xx body into `R`.
    pub async fn fetch_json<R>(self) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.send().await?;
        Response::<Json, R>::async_from(response).await.collect()
    }

    /// Sends the request and returns the body verbatim, whatever the status.
    pub async fn fetch_text(self) -> Result<String, Error> {
        let response = self.send().await?;
        Response::<Raw, String>::async_from(response).await.collect()
    }
}

impl RequestBuilder<Post> {
    pub fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        self.request
            .header(reqwest::header::CONTENT_TYPE.as_str(), "application/json")
            .body(Body::json(body)?);
        Ok(self)
    }
}
