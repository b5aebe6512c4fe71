use super::{
    handler::{repository_handler::RepositoryHandler, search_handler::SearchHandler},
    headers::Headers,
    response::{PullRequest, Repository, SearchResponse},
};
use crate::{
    config::Config,
    http::{Client, ClientRequestBuilder},
};
use anyhow::{bail, Context, Result};
use url::Url;

const PUBLIC_HOST: &str = "github.com";
const PUBLIC_API_URL: &str = "https://api.github.com/";
const ENTERPRISE_API_SUFFIX: &str = "api/v3/";
const API_SEGMENT: &str = "api";

pub struct GithubClient {
    http: Client,
    api_url: Url,
    token: String,
}

impl GithubClient {
    /// Builds a client for github.com, or for a GitHub Enterprise instance
    /// when `base_url` points somewhere else.
    pub fn new(config: &Config) -> Result<GithubClient> {
        if !is_enterprise(&config.base_url) {
            return GithubClient::with_api_url(PUBLIC_API_URL, &config.access_token);
        }

        let api_url = enterprise_api_url(&config.base_url)?;
        log::info!("Using GitHub Enterprise at {}", api_url);

        GithubClient::with_api_url(&api_url, &config.access_token)
            .context("Couldn't create git client")
    }

    pub fn with_api_url(api_url: &str, token: impl Into<String>) -> Result<GithubClient> {
        let mut api_url =
            Url::parse(api_url).with_context(|| format!("Invalid api url {}", api_url))?;

        // endpoint paths are joined relative to the api root
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(GithubClient {
            http: Client::new(),
            api_url,
            token: token.into(),
        })
    }

    pub fn search(&self) -> SearchHandler<'_> {
        SearchHandler::new(self)
    }

    pub fn repo(
        &self,
        owner: impl Into<String>,
        name: impl Into<String>,
    ) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) async fn search_repositories(
        &self,
        query: &str,
        per_page: Option<u8>,
    ) -> Result<Vec<Repository>> {
        let url = self.endpoint("search/repositories")?;

        let mut request = self
            .http
            .clone()
            .get(url)
            .default_headers(&self.token)
            .query("q", query);

        if let Some(per_page) = per_page {
            request = request.query("per_page", per_page);
        }

        let response: SearchResponse<Repository> = request.fetch_json().await?;

        log::debug!(
            "search matched {} repositories, {} returned",
            response.total_count,
            response.items.len()
        );

        Ok(response.items)
    }

    pub(super) async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        per_page: Option<u8>,
    ) -> Result<Vec<PullRequest>> {
        let url = self.endpoint(&format!("repos/{}/{}/pulls", owner, repo))?;

        let mut request = self
            .http
            .clone()
            .get(url)
            .default_headers(&self.token)
            .query("state", state);

        if let Some(per_page) = per_page {
            request = request.query("per_page", per_page);
        }

        Ok(request.fetch_json().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_url
            .join(path)
            .with_context(|| format!("Invalid endpoint {}", path))
    }
}

pub fn is_enterprise(base_url: &str) -> bool {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return false;
    }

    // an unparsable url is left to fail in `enterprise_api_url`
    match parse_base_url(base_url) {
        Ok(url) => !url.host_str().is_some_and(is_public_host),
        Err(_) => true,
    }
}

/// Parses the base url, reading a bare `host/path` as https.
fn parse_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    match Url::parse(base_url) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", base_url))
        }
        parsed => parsed,
    }
}

fn is_public_host(host: &str) -> bool {
    host == PUBLIC_HOST || host.ends_with(&format!(".{}", PUBLIC_HOST))
}

/// Appends `api/v3/` to the base url unless one of its path segments is
/// already `api`.
pub fn enterprise_api_url(base_url: &str) -> Result<String> {
    let base_url = base_url.trim();
    let mut url = parse_base_url(base_url)
        .with_context(|| format!("Can not parse base url {}", base_url))?;

    if url.cannot_be_a_base() {
        bail!("Can not use {} as a base url", base_url);
    }

    let has_api_segment = url
        .path_segments()
        .is_some_and(|mut segments| segments.any(|segment| segment == API_SEGMENT));

    if has_api_segment {
        return Ok(url.to_string());
    }

    let path = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        ENTERPRISE_API_SUFFIX
    );
    url.set_path(&path);

    Ok(url.to_string())
}
