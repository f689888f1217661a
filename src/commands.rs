//! Action handlers: one function per CLI flag.
//!
//! Every handler performs its API call(s), then prints and logs a
//! confirmation carrying the relevant identifier. Failures propagate to
//! [`run`], which reports them uniformly and never panics or aborts the
//! process with a distinct exit code.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::{
    cli::Action,
    client::ApiClient,
    error::{XbotError, XbotResult},
    types::{ApiResponse, CreateTweetRequest, TweetMedia, TweetReply},
};

/// Directory media downloads are written to.
const DOWNLOAD_DIR: &str = "downloads";

/// Tweet length limit enforced before any request is made.
const MAX_TWEET_CHARS: usize = 280;

/// Result count used for `--search`.
const SEARCH_RESULT_COUNT: u32 = 5;

/// Dispatch one action and report its outcome.
pub async fn run(action: Action, client: &ApiClient) {
    let (context, result) = match action {
        Action::Tweet(text) => (
            "posting text tweet".to_owned(),
            post_tweet(client, &text).await,
        ),
        Action::TweetPhoto { text, image_path } => (
            "posting tweet with photo".to_owned(),
            post_tweet_with_photo(client, &text, &image_path).await,
        ),
        Action::TweetMultiplePhotos { text, image_paths } => (
            "posting tweet with multiple photos".to_owned(),
            post_tweet_with_photos(client, &text, &image_paths).await,
        ),
        Action::ShowTweets(count) => (
            "retrieving recent tweets".to_owned(),
            show_recent_tweets(client, count).await,
        ),
        Action::Follow(username) => (
            format!("following user {username}"),
            follow_user(client, &username).await,
        ),
        Action::Unfollow(username) => (
            format!("unfollowing user {username}"),
            unfollow_user(client, &username).await,
        ),
        Action::Like(tweet_id) => (
            format!("liking tweet {tweet_id}"),
            like_tweet(client, &tweet_id).await,
        ),
        Action::Retweet(tweet_id) => (
            format!("retweeting tweet {tweet_id}"),
            retweet_tweet(client, &tweet_id).await,
        ),
        Action::Reply { text, tweet_id } => (
            format!("replying to tweet {tweet_id}"),
            reply_to_tweet(client, &text, &tweet_id).await,
        ),
        Action::Search(query) => (
            "searching tweets".to_owned(),
            search_tweets(client, &query).await,
        ),
        Action::DownloadMedia(tweet_id) => (
            format!("downloading media from tweet {tweet_id}"),
            download_media(client, &tweet_id, Path::new(DOWNLOAD_DIR)).await,
        ),
        Action::Dm { user_id, text } => (
            format!("sending direct message to user {user_id}"),
            send_direct_message(client, &user_id, &text).await,
        ),
        Action::Delete(tweet_id) => (
            format!("deleting tweet {tweet_id}"),
            delete_tweet(client, &tweet_id).await,
        ),
    };

    if let Err(err) = result {
        error!(context = %context, error = %err, "action failed");
        println!("Error {context}: {err}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tweet actions
// ─────────────────────────────────────────────────────────────────────────────

pub async fn post_tweet(client: &ApiClient, text: &str) -> XbotResult<()> {
    validate_tweet_text(text)?;

    let request = CreateTweetRequest {
        text: Some(text.to_owned()),
        ..Default::default()
    };
    let response = client.create_tweet(&request).await?;

    info!(tweet_id = %response.data.id, "posted text tweet");
    println!("Posted tweet: {}", response.data.id);
    Ok(())
}

pub async fn post_tweet_with_photo(
    client: &ApiClient,
    text: &str,
    image_path: &Path,
) -> XbotResult<()> {
    let tweet_id = create_tweet_with_media(client, text, std::slice::from_ref(&image_path)).await?;

    info!(tweet_id = %tweet_id, "posted tweet with photo");
    println!("Posted tweet with photo: {tweet_id}");
    Ok(())
}

pub async fn post_tweet_with_photos(
    client: &ApiClient,
    text: &str,
    image_paths: &[PathBuf],
) -> XbotResult<()> {
    let paths: Vec<&Path> = image_paths.iter().map(PathBuf::as_path).collect();
    let tweet_id = create_tweet_with_media(client, text, &paths).await?;

    info!(tweet_id = %tweet_id, photos = image_paths.len(), "posted tweet with multiple photos");
    println!(
        "Posted tweet with {} photos: {tweet_id}",
        image_paths.len()
    );
    Ok(())
}

/// Upload every image, then create one tweet referencing all of them.
/// A single failed upload fails the whole action; no tweet is created.
async fn create_tweet_with_media<P: AsRef<Path>>(
    client: &ApiClient,
    text: &str,
    image_paths: &[P],
) -> XbotResult<String> {
    validate_tweet_text(text)?;

    let mut media_ids = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        let media = client.upload_media(path.as_ref()).await?;
        media_ids.push(media.media_id_string);
    }

    let request = CreateTweetRequest {
        text: Some(text.to_owned()),
        media: Some(TweetMedia { media_ids }),
        ..Default::default()
    };
    let response = client.create_tweet(&request).await?;
    Ok(response.data.id)
}

pub async fn reply_to_tweet(client: &ApiClient, text: &str, tweet_id: &str) -> XbotResult<()> {
    validate_tweet_text(text)?;

    let request = CreateTweetRequest {
        text: Some(text.to_owned()),
        reply: Some(TweetReply {
            in_reply_to_tweet_id: tweet_id.to_owned(),
        }),
        ..Default::default()
    };
    let response = client.create_tweet(&request).await?;

    info!(tweet_id, reply_id = %response.data.id, "replied to tweet");
    println!("Replied to tweet: {tweet_id}");
    Ok(())
}

pub async fn delete_tweet(client: &ApiClient, tweet_id: &str) -> XbotResult<()> {
    client.delete_tweet(tweet_id).await?;

    info!(tweet_id, "deleted tweet");
    println!("Deleted tweet: {tweet_id}");
    Ok(())
}

pub async fn like_tweet(client: &ApiClient, tweet_id: &str) -> XbotResult<()> {
    let me = require_data(client.get_me().await?, "user")?;
    client.like(&me.id, tweet_id).await?;

    info!(tweet_id, "liked tweet");
    println!("Liked tweet: {tweet_id}");
    Ok(())
}

pub async fn retweet_tweet(client: &ApiClient, tweet_id: &str) -> XbotResult<()> {
    let me = require_data(client.get_me().await?, "user")?;
    client.retweet(&me.id, tweet_id).await?;

    info!(tweet_id, "retweeted tweet");
    println!("Retweeted tweet: {tweet_id}");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Follow graph
// ─────────────────────────────────────────────────────────────────────────────

pub async fn follow_user(client: &ApiClient, username: &str) -> XbotResult<()> {
    let username = username.trim_start_matches('@');
    let target = require_data(client.get_user_by_username(username).await?, "user")?;
    let me = require_data(client.get_me().await?, "user")?;
    client.follow(&me.id, &target.id).await?;

    info!(username, user_id = %target.id, "followed user");
    println!("Followed user: {username}");
    Ok(())
}

pub async fn unfollow_user(client: &ApiClient, username: &str) -> XbotResult<()> {
    let username = username.trim_start_matches('@');
    let target = require_data(client.get_user_by_username(username).await?, "user")?;
    let me = require_data(client.get_me().await?, "user")?;
    client.unfollow(&me.id, &target.id).await?;

    info!(username, user_id = %target.id, "unfollowed user");
    println!("Unfollowed user: {username}");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Timelines and search
// ─────────────────────────────────────────────────────────────────────────────

pub async fn show_recent_tweets(client: &ApiClient, count: u32) -> XbotResult<()> {
    let me = require_data(client.get_me().await?, "user")?;
    let response = client.get_user_tweets(&me.id, count).await?;
    let tweets = response.data.unwrap_or_default();

    info!(count = tweets.len(), "retrieved recent tweets");
    for tweet in &tweets {
        println!(
            "{} - {}\n",
            tweet.created_at.as_deref().unwrap_or("unknown"),
            tweet.text
        );
    }
    Ok(())
}

pub async fn search_tweets(client: &ApiClient, query: &str) -> XbotResult<()> {
    let response = client.search_recent(query, SEARCH_RESULT_COUNT).await?;
    let tweets = response.data.unwrap_or_default();

    info!(query, results = tweets.len(), "searched recent tweets");
    for tweet in &tweets {
        println!(
            "{}: {}",
            tweet.author_id.as_deref().unwrap_or("unknown"),
            tweet.text
        );
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Media and direct messages
// ─────────────────────────────────────────────────────────────────────────────

pub async fn download_media(
    client: &ApiClient,
    tweet_id: &str,
    save_dir: &Path,
) -> XbotResult<()> {
    let response = client.get_tweet_media(tweet_id).await?;
    let media = response.includes.map(|i| i.media).unwrap_or_default();

    // Only photos carry a direct URL; other media types are skipped.
    let urls: Vec<&str> = media.iter().filter_map(|m| m.url.as_deref()).collect();
    if urls.is_empty() {
        println!("No media found in tweet {tweet_id}");
        return Ok(());
    }

    tokio::fs::create_dir_all(save_dir).await?;

    for url in urls {
        let bytes = client.fetch_media(url).await?;
        let file_name = url.rsplit('/').next().unwrap_or("media");
        let target = save_dir.join(file_name);
        tokio::fs::write(&target, &bytes).await?;

        info!(tweet_id, path = %target.display(), "downloaded media");
        println!("Downloaded media to {}", target.display());
    }
    Ok(())
}

pub async fn send_direct_message(
    client: &ApiClient,
    user_id: &str,
    text: &str,
) -> XbotResult<()> {
    let response = client.send_direct_message(user_id, text).await?;

    info!(user_id, dm_event_id = %response.data.dm_event_id, "sent direct message");
    println!("Sent direct message to user: {user_id}");
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn validate_tweet_text(text: &str) -> XbotResult<()> {
    if text.chars().count() > MAX_TWEET_CHARS {
        return Err(XbotError::InvalidInput(format!(
            "tweet exceeds {MAX_TWEET_CHARS} character limit"
        )));
    }
    Ok(())
}

fn require_data<T>(response: ApiResponse<T>, what: &'static str) -> XbotResult<T> {
    response.data.ok_or(XbotError::EmptyResponse(what))
}
