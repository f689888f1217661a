//! Command-line interface.
//!
//! Every action flag belongs to one `ArgGroup`, so at most one is accepted
//! per run. [`Cli::action`] resolves the parsed flags into an [`Action`]
//! using a fixed priority order.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Command-line client for the X (Twitter) v2 API.
#[derive(Parser, Debug)]
#[command(name = "xbot")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct Cli {
    /// Post a text tweet.
    #[arg(long, value_name = "TEXT", group = "action")]
    pub tweet: Option<String>,

    /// Post a tweet with a photo.
    #[arg(long, num_args = 2, value_names = ["TEXT", "IMAGE_PATH"], group = "action")]
    pub tweet_photo: Option<Vec<String>>,

    /// Post a tweet with multiple photos.
    #[arg(long, num_args = 2.., value_names = ["TEXT", "IMAGE_PATH"], group = "action")]
    pub tweet_multiple_photos: Option<Vec<String>>,

    /// Show recent tweets from the authenticated account.
    #[arg(long, value_name = "COUNT", group = "action")]
    pub show_tweets: Option<u32>,

    /// Follow a user.
    #[arg(long, value_name = "USERNAME", group = "action")]
    pub follow: Option<String>,

    /// Unfollow a user.
    #[arg(long, value_name = "USERNAME", group = "action")]
    pub unfollow: Option<String>,

    /// Like a tweet by ID.
    #[arg(long, value_name = "TWEET_ID", group = "action")]
    pub like: Option<String>,

    /// Retweet a tweet by ID.
    #[arg(long, value_name = "TWEET_ID", group = "action")]
    pub retweet: Option<String>,

    /// Reply to a tweet by ID.
    #[arg(long, num_args = 2, value_names = ["TEXT", "TWEET_ID"], group = "action")]
    pub reply: Option<Vec<String>>,

    /// Search recent tweets.
    #[arg(long, value_name = "QUERY", group = "action")]
    pub search: Option<String>,

    /// Download media attached to a tweet.
    #[arg(long, value_name = "TWEET_ID", group = "action")]
    pub download_media: Option<String>,

    /// Send a direct message to a user.
    #[arg(long, num_args = 2, value_names = ["USER_ID", "TEXT"], group = "action")]
    pub dm: Option<Vec<String>>,

    /// Delete a tweet by ID.
    #[arg(long, value_name = "TWEET_ID", group = "action")]
    pub delete: Option<String>,
}

/// One CLI action, resolved from the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Tweet(String),
    TweetPhoto { text: String, image_path: PathBuf },
    TweetMultiplePhotos { text: String, image_paths: Vec<PathBuf> },
    ShowTweets(u32),
    Follow(String),
    Unfollow(String),
    Like(String),
    Retweet(String),
    Reply { text: String, tweet_id: String },
    Search(String),
    DownloadMedia(String),
    Dm { user_id: String, text: String },
    Delete(String),
}

impl Cli {
    /// Resolve the parsed flags into at most one action.
    ///
    /// The parser already rejects combined action flags; the priority order
    /// here fixes which flag wins should that ever change.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        // Multi-value arities below are guaranteed by clap's num_args.
        if let Some(text) = &self.tweet {
            Some(Action::Tweet(text.clone()))
        } else if let Some(values) = &self.tweet_photo {
            Some(Action::TweetPhoto {
                text: values[0].clone(),
                image_path: PathBuf::from(&values[1]),
            })
        } else if let Some(values) = &self.tweet_multiple_photos {
            Some(Action::TweetMultiplePhotos {
                text: values[0].clone(),
                image_paths: values[1..].iter().map(PathBuf::from).collect(),
            })
        } else if let Some(count) = self.show_tweets {
            Some(Action::ShowTweets(count))
        } else if let Some(username) = &self.follow {
            Some(Action::Follow(username.clone()))
        } else if let Some(username) = &self.unfollow {
            Some(Action::Unfollow(username.clone()))
        } else if let Some(tweet_id) = &self.like {
            Some(Action::Like(tweet_id.clone()))
        } else if let Some(tweet_id) = &self.retweet {
            Some(Action::Retweet(tweet_id.clone()))
        } else if let Some(values) = &self.reply {
            Some(Action::Reply {
                text: values[0].clone(),
                tweet_id: values[1].clone(),
            })
        } else if let Some(query) = &self.search {
            Some(Action::Search(query.clone()))
        } else if let Some(tweet_id) = &self.download_media {
            Some(Action::DownloadMedia(tweet_id.clone()))
        } else if let Some(values) = &self.dm {
            Some(Action::Dm {
                user_id: values[0].clone(),
                text: values[1].clone(),
            })
        } else {
            self.delete.as_ref().map(|id| Action::Delete(id.clone()))
        }
    }
}
