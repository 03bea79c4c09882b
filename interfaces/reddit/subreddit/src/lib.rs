//! Thin Reddit REST client
//!
//! - Raw `about.json` / `hot.json` calls in `index`
//! - Response payloads in `models`
//! - Redirects are never followed: Reddit answers unknown subreddits with a 302

pub mod index;
pub mod models;
