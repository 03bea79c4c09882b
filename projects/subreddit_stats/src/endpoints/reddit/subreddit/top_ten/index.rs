use interfaces_reddit_subreddit::index::{RedditClient, SubredditName};
use tracing::warn;

use crate::endpoints::reddit::subreddit::pagination::fetch_hot_page;

pub const TOP_TEN_LIMIT: u32 = 10;

/// Titles of the first ten hot posts, or `None` when the name is invalid or
/// the page cannot be fetched.
pub async fn top_ten(client: &RedditClient, subreddit: &str) -> Option<Vec<String>> {
	let subreddit = match SubredditName::parse(subreddit) {
		Ok(name) => name,
		Err(err) => {
			warn!(subreddit, error = %err, "rejected subreddit name");
			return None;
		}
	};

	match fetch_hot_page(client, &subreddit, TOP_TEN_LIMIT, None).await {
		Ok(page) => Some(
			page.titles()
				.take(TOP_TEN_LIMIT as usize)
				.map(str::to_owned)
				.collect(),
		),
		Err(err) => {
			warn!(%subreddit, error = %err, "top ten lookup failed");
			None
		}
	}
}
