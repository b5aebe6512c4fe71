use super::Error;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

/// Body kept as text; the status is recorded but never judged.
pub struct Raw;

/// Body parsed as JSON; anything outside 2xx is an error.
pub struct Json;

pub trait ResponseType {}

impl ResponseType for Raw {}
impl ResponseType for Json {}

pub enum Response<ResponseType, T> {
    Success(Inner<ResponseType, T>),
    Error(ErrorResponse),
}

pub struct Inner<ResponseType, T> {
    marker: PhantomData<ResponseType>,
    pub payload: T,
    pub status: u16,
}

impl<S, T> Response<S, T>
where
    S: ResponseType,
{
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(response) => {
                log::debug!("response status {}", response.status);
                Ok(response.payload)
            }
            Response::Error(response) => Err(Error::GenericResponseError {
                status: response.status,
                message: response.message,
            }),
        }
    }
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<Json, T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();

        let payload = match value.text().await {
            Ok(text) => {
                if !(200..300).contains(&status) {
                    return Response::Error(ErrorResponse {
                        status,
                        message: text,
                    });
                }
                match serde_json::from_str::<T>(&text) {
                    Ok(payload) => payload,
                    Err(err) => {
                        return Response::Error(ErrorResponse {
                            status,
                            message: format!("Failed to parse json: {}", err),
                        })
                    }
                }
            }
            Err(err) => {
                return Response::Error(ErrorResponse {
                    status,
                    message: format!("Failed to read response text: {}", err),
                });
            }
        };
        Response::Success(Inner {
            marker: PhantomData,
            status,
            payload,
        })
    }
}

impl AsyncFrom<reqwest::Response> for Response<Raw, String> {
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();

        match value.text().await {
            Ok(payload) => Response::Success(Inner {
                marker: PhantomData,
                status,
                payload,
            }),
            Err(err) => Response::Error(ErrorResponse {
                status,
                message: format!("Failed to read response text: {}", err),
            }),
        }
    }
}
