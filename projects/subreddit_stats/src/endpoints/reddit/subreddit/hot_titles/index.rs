use interfaces_reddit_subreddit::index::{RedditClient, SubredditName};
use tracing::{info, warn};

use crate::endpoints::reddit::subreddit::pagination::walk_hot_listing;

/// Every hot-post title across all pages, in listing order.
///
/// Returns `None` when the name is invalid or any page fetch fails: a partial
/// title list is never handed out.
pub async fn hot_titles(client: &RedditClient, subreddit: &str) -> Option<Vec<String>> {
	let subreddit = match SubredditName::parse(subreddit) {
		Ok(name) => name,
		Err(err) => {
			warn!(subreddit, error = %err, "rejected subreddit name");
			return None;
		}
	};

	let mut titles = Vec::new();

	let summary = walk_hot_listing(client, &subreddit, |page| {
		titles.extend(page.titles().map(str::to_owned));
	})
	.await;

	if !summary.is_complete() {
		return None;
	}

	info!(%subreddit, pages = summary.pages, titles = titles.len(), "collected hot titles");

	Some(titles)
}
