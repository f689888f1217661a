//! Command-line client for the X (Twitter) v2 API.
//!
//! Each CLI flag maps to one action against the remote API:
//! posting tweets (text, single photo, multiple photos), deleting,
//! liking, retweeting, replying, following/unfollowing users, searching
//! recent tweets, downloading a tweet's media, and sending direct
//! messages. User-context requests are signed with OAuth 1.0a.

#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod oauth;
pub mod types;

pub use cli::{Action, Cli};
pub use client::ApiClient;
pub use config::{ApiConfig, Credentials};
pub use error::{XbotError, XbotResult};
