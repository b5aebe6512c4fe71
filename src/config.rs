use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE_NAME: &str = "pr-notifier.yaml";

/// Input for a single run, given as a JSON record or a YAML document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "slack_web_hook_url")]
    pub webhook_url: String,
    pub channel: String,
    pub access_token: String,
    #[serde(rename = "git_repo_query")]
    pub repo_query: String,
    #[serde(rename = "git_user", default)]
    pub user: String,
    #[serde(default)]
    pub base_url: String,
}

impl Config {
    /// Resolves the input from the first command line argument: an inline
    /// JSON record, a path to a config file, or the default config file.
    pub async fn load(input: Option<String>) -> Result<Config> {
        let content = match input {
            Some(input) if input.trim_start().starts_with('{') => input,
            Some(path) => read_file(&path).await?,
            None => read_file(DEFAULT_CONFIG_FILE_NAME).await?,
        };

        Config::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config> {
        let config = if content.trim_start().starts_with('{') {
            parse_json(content)?
        } else {
            serde_yaml::from_str::<Config>(content).context("Malformed config")?
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("slack_web_hook_url", &self.webhook_url),
            ("channel", &self.channel),
            ("access_token", &self.access_token),
            ("git_repo_query", &self.repo_query),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            bail!("missing required config values: {}", missing.join(", "));
        }

        Ok(())
    }
}

/// A repeated key keeps its last value, as JSON decoders usually do.
fn parse_json(content: &str) -> Result<Config> {
    let record: serde_json::Value = serde_json::from_str(content).context("Malformed config")?;
    serde_json::from_value(record).context("Malformed config")
}

async fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    const JSON: &str = r##"{
        "slack_web_hook_url": "https://hooks.slack.com/services/T/B/X",
        "channel": "#reviews",
        "access_token": "token",
        "git_repo_query": "service",
        "git_user": "acme"
    }"##;

    #[test]
    fn should_parse_json_input() -> Result<()> {
        let config = Config::parse(JSON)?;

        assert_eq!(config.webhook_url, "https://hooks.slack.com/services/T/B/X");
        assert_eq!(config.channel, "#reviews");
        assert_eq!(config.access_token, "token");
        assert_eq!(config.repo_query, "service");
        assert_eq!(config.user, "acme");
        assert_eq!(config.base_url, "");
        Ok(())
    }

    #[test]
    fn should_reject_blank_required_values() {
        let input = r##"{
            "slack_web_hook_url": "https://hooks.slack.com/services/T/B/X",
            "channel": " ",
            "access_token": "",
            "git_repo_query": "service"
        }"##;

        let err = Config::parse(input).unwrap_err();

        assert_eq!(
            err.to_string(),
            "missing required config values: channel, access_token"
        );
    }

    #[test]
    fn should_reject_missing_fields() {
        let result = Config::parse(r##"{ "channel": "#reviews" }"##);

        assert!(result.is_err());
    }

    #[test]
    fn should_keep_last_value_of_repeated_json_key() -> Result<()> {
        let config = Config::parse(
            r##"{
                "slack_web_hook_url": "https://hooks.slack.com/services/T/B/X",
                "channel": "#reviews",
                "access_token": "token",
                "git_repo_query": "service",
                "git_user": "first",
                "git_user": "acme"
            }"##,
        )?;

        assert_eq!(config.user, "acme");
        Ok(())
    }

    #[test]
    fn should_parse_yaml_with_leading_comment() -> Result<()> {
        let config = Config::parse(
            "# reviews digest\n\
             slack_web_hook_url: https://hooks.slack.com/x\n\
             channel: \"#reviews\"\n\
             access_token: token\n\
             git_repo_query: svc\n",
        )?;

        assert_eq!(config.channel, "#reviews");
        assert_eq!(config.user, "");
        Ok(())
    }

    #[tokio::test]
    async fn should_load_inline_json_argument() -> Result<()> {
        let config = Config::load(Some(JSON.to_string())).await?;

        assert_eq!(config.user, "acme");
        Ok(())
    }

    #[tokio::test]
    async fn should_load_yaml_file_argument() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("notifier.yaml");
        fs::write(
            &path,
            "slack_web_hook_url: https://hooks.slack.com/x\n\
             channel: reviews\n\
             access_token: token\n\
             git_repo_query: svc\n\
             git_user: acme\n\
             base_url: https://git.example.com/\n",
        )?;

        let config = Config::load(Some(path.display().to_string())).await?;

        assert_eq!(config.base_url, "https://git.example.com/");
        assert_eq!(config.repo_query, "svc");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_unreadable_file() {
        let result = Config::load(Some("does/not/exist.yaml".to_string())).await;

        assert!(result.is_err());
    }
}
