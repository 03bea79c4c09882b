//! Subreddit statistics over Reddit's public JSON API
//!
//! - Operations in `endpoints/` (subscribers, top ten, hot titles, word count)
//! - Keyword tallying in `utils/`
//! - Settings come from the environment (`.env` honoured), see `config`

pub mod config;
pub mod endpoints;
pub mod utils;
