use super::Error;
use serde::Serialize;
use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Json(serde_json::Value),
}

impl Body {
    pub fn json<T: Serialize>(value: &T) -> Result<Body, Error> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|cause| Error::SerializeBodyError { cause })
    }
}

#[derive(Default, Clone, Debug)]
pub struct HeaderMap(pub HashMap<String, String>);

impl Deref for HeaderMap {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HeaderMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<HeaderMap> for reqwest::header::HeaderMap {
    type Error = Error;

    fn try_from(map: HeaderMap) -> Result<Self, Self::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        for (key, value) in map.0 {
            let name = reqwest::header::HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| Error::InvalidHeaderError { name: key.clone() })?;
            let value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|_| Error::InvalidHeaderError { name: key.clone() })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        HttpRequest {
            method,
            url,
            headers: HeaderMap::default(),
            body: None,
        }
    }

    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn bearer_auth(&mut self, token: impl AsRef<str>) -> &mut Self {
        self.header(
            reqwest::header::AUTHORIZATION.as_str(),
            format!("Bearer {}", token.as_ref()),
        )
    }

    pub fn query(&mut self, key: &str, value: &str) -> &mut Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    pub fn body(&mut self, body: Body) -> &mut Self {
        self.body = Some(body);
        self
    }
}
