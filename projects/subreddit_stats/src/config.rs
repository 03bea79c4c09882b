use std::time::Duration;

use interfaces_reddit_subreddit::index::{BuildRedditClientError, RedditClient};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "linux:subreddit_stats:v0.1.0 (by /u/subreddit_stats)";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("REDDIT_TIMEOUT_SECS must be a whole number of seconds, got {value:?}")]
    InvalidTimeout {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("{key} must not be empty")]
    EmptyValue { key: &'static str },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment after loading `.env`.
    pub fn from_env() -> Result<Self, SettingsError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = non_empty(&lookup, "REDDIT_BASE_URL")?.unwrap_or(defaults.base_url);
        let user_agent = non_empty(&lookup, "REDDIT_USER_AGENT")?.unwrap_or(defaults.user_agent);
        let log_level = non_empty(&lookup, "LOG_LEVEL")?.unwrap_or(defaults.log_level);

        let timeout = match lookup("REDDIT_TIMEOUT_SECS") {
            None => None,
            Some(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|source| SettingsError::InvalidTimeout {
                        value: value.clone(),
                        source,
                    })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        Ok(Self {
            base_url,
            user_agent,
            timeout,
            log_level,
        })
    }

    pub fn build_client(&self) -> Result<RedditClient, BuildRedditClientError> {
        RedditClient::new(&self.base_url, &self.user_agent, self.timeout)
    }
}

fn non_empty<F>(lookup: &F, key: &'static str) -> Result<Option<String>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(SettingsError::EmptyValue { key }),
        Some(value) => Ok(Some(value.trim().to_owned())),
    }
}
