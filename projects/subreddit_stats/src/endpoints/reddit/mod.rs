pub mod subreddit;
