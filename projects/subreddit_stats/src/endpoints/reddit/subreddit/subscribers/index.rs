use interfaces_reddit_subreddit::index::{
	fetch_subreddit_about, FetchSubredditAboutError, RedditClient, RedditResult, SubredditName};
use interfaces_reddit_subreddit::models::AboutResponse;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FetchSubscriberCountError {
	#[error("FetchSubredditAbout: {source}")]
	FetchSubredditAbout {
		#[from]
		source: FetchSubredditAboutError,
	},

	#[error("UnexpectedStatus: {status}")]
	UnexpectedStatus {
		status: StatusCode,
	},

	#[error("DeserializeResponseBody: {source}")]
	DeserializeResponseBody {
		#[from]
		source: serde_json::Error,
	},
}

pub async fn fetch_subscriber_count(
	client: &RedditClient,
	subreddit: &SubredditName,
) -> Result<u64, FetchSubscriberCountError> {
	let RedditResult { body, status } = fetch_subreddit_about(client, subreddit).await?;

	if status != StatusCode::OK {
		return Err(FetchSubscriberCountError::UnexpectedStatus { status });
	}

	let parsed: AboutResponse = serde_json::from_str(&body)?;

	Ok(parsed.data.subscribers.unwrap_or(0))
}

/// Subscriber count of `subreddit`, or 0 when the name is invalid or the
/// lookup fails for any reason.
pub async fn number_of_subscribers(client: &RedditClient, subreddit: &str) -> u64 {
	let subreddit = match SubredditName::parse(subreddit) {
		Ok(name) => name,
		Err(err) => {
			warn!(subreddit, error = %err, "rejected subreddit name");
			return 0;
		}
	};

	match fetch_subscriber_count(client, &subreddit).await {
		Ok(count) => count,
		Err(err) => {
			warn!(%subreddit, error = %err, "subscriber lookup failed");
			0
		}
	}
}
