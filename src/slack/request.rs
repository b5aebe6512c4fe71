use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct SlackRequest {
    pub channel: String,
    pub icon_emoji: String,
    pub text: String,
}

impl SlackRequest {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        SlackRequest {
            channel: channel.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}
