use std::io::{self, Write};

use interfaces_reddit_subreddit::index::{RedditClient, SubredditName};
use tracing::{info, warn};

use crate::endpoints::reddit::subreddit::pagination::walk_hot_listing;
use crate::utils::keyword_tally::KeywordTally;

/// Counts `keywords` across the titles of every hot post of `subreddit`.
///
/// Only keywords seen at least once are returned, highest count first, ties
/// in alphabetical order. A failed page fetch ends the walk and the counts
/// gathered so far are returned; an invalid name yields an empty result.
pub async fn count_words<S>(
	client: &RedditClient,
	subreddit: &str,
	keywords: &[S],
) -> Vec<(String, u64)>
where
	S: AsRef<str>,
{
	let subreddit = match SubredditName::parse(subreddit) {
		Ok(name) => name,
		Err(err) => {
			warn!(subreddit, error = %err, "rejected subreddit name");
			return Vec::new();
		}
	};

	let mut tally = KeywordTally::new(keywords);
	if tally.is_empty() {
		return Vec::new();
	}

	let summary = walk_hot_listing(client, &subreddit, |page| {
		for title in page.titles() {
			tally.observe_title(title);
		}
	})
	.await;

	info!(
		%subreddit,
		pages = summary.pages,
		complete = summary.is_complete(),
		"keyword walk finished"
	);

	tally.into_ranked()
}

/// Writes one `keyword: count` line per entry.
pub fn write_word_counts<W: Write>(writer: &mut W, counts: &[(String, u64)]) -> io::Result<()> {
	for (keyword, count) in counts {
		writeln!(writer, "{keyword}: {count}")?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_one_line_per_keyword() {
		let mut out = Vec::new();
		write_word_counts(
			&mut out,
			&[("java".to_string(), 27), ("javascript".to_string(), 20)],
		)
		.unwrap();

		assert_eq!(String::from_utf8(out).unwrap(), "java: 27\njavascript: 20\n");
	}

	#[test]
	fn writes_nothing_for_no_counts() {
		let mut out = Vec::new();
		write_word_counts(&mut out, &[]).unwrap();
		assert!(out.is_empty());
	}
}
