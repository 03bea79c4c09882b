use interfaces_reddit_subreddit::index::{
	fetch_hot_listing, FetchHotListingError, RedditClient, RedditResult, SubredditName};
use interfaces_reddit_subreddit::models::{ListingData, ListingResponse};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

/// Items requested per hot-listing page.
pub const HOT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum FetchHotPageError {
	#[error("FetchHotListing: {source}")]
	FetchHotListing {
		#[from]
		source: FetchHotListingError,
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

pub async fn fetch_hot_page(
	client: &RedditClient,
	subreddit: &SubredditName,
	limit: u32,
	after: Option<&str>,
) -> Result<ListingData, FetchHotPageError> {
	let RedditResult { body, status } =
		fetch_hot_listing(client, subreddit, limit, after).await?;

	if status != StatusCode::OK {
		return Err(FetchHotPageError::UnexpectedStatus { status });
	}

	let parsed: ListingResponse = serde_json::from_str(&body)?;

	Ok(parsed.data)
}

/// How a walk over the hot listing ended.
#[derive(Debug)]
pub struct WalkSummary {
	pub pages: usize,
	/// Set when a page fetch failed and the walk stopped early.
	pub stopped_by: Option<FetchHotPageError>,
}

impl WalkSummary {
	pub fn is_complete(&self) -> bool {
		self.stopped_by.is_none()
	}
}

/// Follows `after` cursors through every hot page of `subreddit`, handing each
/// successfully fetched page to `on_page` in order.
///
/// The first failed fetch ends the walk; pages already handed out stay
/// accounted for and the failure is reported in the summary, never raised.
pub async fn walk_hot_listing<F>(
	client: &RedditClient,
	subreddit: &SubredditName,
	mut on_page: F,
) -> WalkSummary
where
	F: FnMut(&ListingData),
{
	let mut pages = 0;
	let mut cursor: Option<String> = None;

	loop {
		let page = match fetch_hot_page(client, subreddit, HOT_PAGE_SIZE, cursor.as_deref()).await {
			Ok(page) => page,
			Err(err) => {
				warn!(%subreddit, pages, error = %err, "hot listing walk stopped early");
				return WalkSummary { pages, stopped_by: Some(err) };
			}
		};

		on_page(&page);
		pages += 1;

		cursor = page.next_cursor().map(str::to_owned);
		if cursor.is_none() {
			debug!(%subreddit, pages, "hot listing walk finished");
			return WalkSummary { pages, stopped_by: None };
		}
	}
}
