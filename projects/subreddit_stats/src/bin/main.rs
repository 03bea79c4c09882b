use std::io::{self, Write};

use clap::{Parser, Subcommand};
use projects_subreddit_stats::config::{Settings, SettingsError};
use projects_subreddit_stats::endpoints::reddit::subreddit::{
	hot_titles::index::hot_titles,
	subscribers::index::number_of_subscribers,
	top_ten::index::top_ten,
	word_count::index::{count_words, write_word_counts},
};
use thiserror::Error;
use tracing::debug;
use utils_trace::tracing_init;

#[derive(Debug, Parser)]
#[command(name = "subreddit_stats", version, about = "Query subreddit statistics from Reddit's public API")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print the subscriber count (0 when the subreddit is invalid)
	Subscribers { subreddit: String },
	/// Print the titles of the first ten hot posts
	TopTen { subreddit: String },
	/// Print every hot post title across all pages
	HotTitles { subreddit: String },
	/// Count case-insensitive keyword occurrences across all hot post titles
	CountWords {
		subreddit: String,
		#[arg(required = true)]
		keywords: Vec<String>,
	},
}

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Settings: {source}")]
	Settings {
		#[source]
		source: SettingsError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("ClientBuild: {source}")]
	ClientBuild {
		#[source]
		source: interfaces_reddit_subreddit::index::BuildRedditClientError,
	},
	#[error("WriteOutput: {source}")]
	WriteOutput {
		#[source]
		source: io::Error,
	},
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), MainError> {
	let cli = Cli::parse();

	let settings = Settings::from_env()
		.map_err(|source| MainError::Settings { source })?;

	tracing_init(&settings.log_level)
		.map_err(|source| MainError::TracingInit { source })?;

	let client = settings
		.build_client()
		.map_err(|source| MainError::ClientBuild { source })?;

	debug!(base_url = client.base_url(), command = ?cli.command, "running");

	let stdout = io::stdout();
	let mut out = stdout.lock();

	let written = match cli.command {
		Command::Subscribers { subreddit } => {
			let count = number_of_subscribers(&client, &subreddit).await;
			writeln!(out, "{count}")
		}
		Command::TopTen { subreddit } => {
			let titles = top_ten(&client, &subreddit).await;
			write_titles(&mut out, titles.as_deref())
		}
		Command::HotTitles { subreddit } => {
			let titles = hot_titles(&client, &subreddit).await;
			write_titles(&mut out, titles.as_deref())
		}
		Command::CountWords { subreddit, keywords } => {
			let counts = count_words(&client, &subreddit, &keywords).await;
			write_word_counts(&mut out, &counts)
		}
	};

	written.map_err(|source| MainError::WriteOutput { source })?;

	Ok(())
}

/// One title per line, or `None` when the lookup produced nothing.
fn write_titles<W: Write>(out: &mut W, titles: Option<&[String]>) -> io::Result<()> {
	match titles {
		Some(titles) => {
			for title in titles {
				writeln!(out, "{title}")?;
			}
			Ok(())
		}
		None => writeln!(out, "None"),
	}
}
