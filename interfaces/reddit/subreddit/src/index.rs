use std::fmt;
use std::time::Duration;

use reqwest::{redirect::Policy, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub struct RedditResult {
    pub body: String,
    pub status: StatusCode,
}

/// Subreddit identifier checked locally before it is ever put into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubredditName(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSubredditName {
    #[error("subreddit name is empty")]
    Empty,

    #[error("subreddit name contains invalid character {found:?}")]
    InvalidCharacter { found: char },
}

impl SubredditName {
    pub fn parse(raw: &str) -> Result<Self, InvalidSubredditName> {
        if raw.is_empty() {
            return Err(InvalidSubredditName::Empty);
        }

        if let Some(found) = raw.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(InvalidSubredditName::InvalidCharacter { found });
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubredditName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared HTTP client bound to one Reddit base URL.
#[derive(Debug, Clone)]
pub struct RedditClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Error)]
pub enum BuildRedditClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

impl RedditClient {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, BuildRedditClientError> {
        let mut builder = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::none());

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|source| BuildRedditClientError::ClientBuild { source })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn subreddit_url(&self, subreddit: &SubredditName, resource: &str) -> String {
        format!("{}/r/{}/{}", self.base_url, subreddit, resource)
    }
}

pub async fn fetch_subreddit_about(
    client: &RedditClient,
    subreddit: &SubredditName,
) -> Result<RedditResult, FetchSubredditAboutError> {
    let url = client.subreddit_url(subreddit, "about.json");
    debug!(%url, "fetching subreddit about");

    let response = client
        .http
        .get(&url)
        .send()
        .await
        .map_err(|source| FetchSubredditAboutError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchSubredditAboutError::ResponseRead { source })?;

    Ok(RedditResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchSubredditAboutError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

pub async fn fetch_hot_listing(
    client: &RedditClient,
    subreddit: &SubredditName,
    limit: u32,
    after: Option<&str>,
) -> Result<RedditResult, FetchHotListingError> {
    let url = client.subreddit_url(subreddit, "hot.json");
    debug!(%url, limit, ?after, "fetching hot listing page");

    let mut request = client.http.get(&url).query(&[("limit", limit.to_string())]);
    if let Some(after) = after {
        request = request.query(&[("after", after)]);
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchHotListingError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchHotListingError::ResponseRead { source })?;

    Ok(RedditResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchHotListingError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
