pub mod message;
mod request;

use self::request::SlackRequest;
use crate::http::{self, Client, ClientRequestBuilder};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
const OK_RESPONSE: &str = "ok";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid webhook url")]
    InvalidWebhookUrl {
        #[source]
        cause: url::ParseError,
    },
    #[error("Non-ok response returned from Slack: {body:?}")]
    NonOkResponse { body: String },
    #[error(transparent)]
    Http(#[from] http::Error),
}

/// Posts `text` to `channel` through the incoming webhook. Delivery only
/// counts as successful when Slack answers with the exact body `ok`.
pub async fn notify(webhook_url: &str, channel: &str, text: &str) -> Result<(), Error> {
    let url = Url::parse(webhook_url).map_err(|cause| Error::InvalidWebhookUrl { cause })?;
    let request = SlackRequest::new(channel, text);

    let body = Client::with_timeout(WEBHOOK_TIMEOUT)?
        .post(url)
        .json_body(&request)?
        .fetch_text()
        .await?;

    if body != OK_RESPONSE {
        return Err(Error::NonOkResponse { body });
    }

    log::info!("notification posted to {}", channel);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    async fn webhook(server: &mut ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("POST", "/services/T/B/X")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "channel": "#reviews",
                "icon_emoji": "",
                "text": "hello"
            })))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await
    }

    fn webhook_url(server: &ServerGuard) -> String {
        format!("{}/services/T/B/X", server.url())
    }

    #[tokio::test]
    async fn should_succeed_on_ok_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = webhook(&mut server, "ok").await;

        notify(&webhook_url(&server), "#reviews", "hello").await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_any_other_body() {
        for body in ["OK", "ok\n", "", "invalid_payload"] {
            let mut server = Server::new_async().await;
            let _mock = webhook(&mut server, body).await;

            let result = notify(&webhook_url(&server), "#reviews", "hello").await;

            assert!(
                matches!(&result, Err(Error::NonOkResponse { body: returned }) if returned == body),
                "body {:?} should be rejected",
                body
            );
        }
    }

    #[tokio::test]
    async fn should_fail_on_transport_error() {
        let result = notify("http://127.0.0.1:1/hook", "#reviews", "hello").await;

        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn should_fail_on_malformed_webhook_url() {
        let result = notify("not a url", "#reviews", "hello").await;

        assert!(matches!(result, Err(Error::InvalidWebhookUrl { .. })));
    }
}
