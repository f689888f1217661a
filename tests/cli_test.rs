//! Parse-level tests for the CLI: flag-to-action mapping, mutual
//! exclusion, and multi-value arity.

use std::path::PathBuf;

use clap::Parser;
use xbot::cli::{Action, Cli};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("xbot").chain(args.iter().copied())).unwrap()
}

#[test]
fn tweet_maps_to_tweet_action() {
    let cli = parse(&["--tweet", "hello world"]);
    assert_eq!(cli.action(), Some(Action::Tweet("hello world".into())));
}

#[test]
fn tweet_photo_maps_text_and_path() {
    let cli = parse(&["--tweet-photo", "caption", "photo.jpg"]);
    assert_eq!(
        cli.action(),
        Some(Action::TweetPhoto {
            text: "caption".into(),
            image_path: PathBuf::from("photo.jpg"),
        })
    );
}

#[test]
fn tweet_multiple_photos_splits_text_from_paths() {
    let cli = parse(&["--tweet-multiple-photos", "caption", "a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(
        cli.action(),
        Some(Action::TweetMultiplePhotos {
            text: "caption".into(),
            image_paths: vec![
                PathBuf::from("a.jpg"),
                PathBuf::from("b.jpg"),
                PathBuf::from("c.jpg"),
            ],
        })
    );
}

#[test]
fn show_tweets_parses_count() {
    let cli = parse(&["--show-tweets", "7"]);
    assert_eq!(cli.action(), Some(Action::ShowTweets(7)));
}

#[test]
fn show_tweets_rejects_non_numeric_count() {
    assert!(Cli::try_parse_from(["xbot", "--show-tweets", "many"]).is_err());
}

#[test]
fn follow_and_unfollow_map_to_usernames() {
    let cli = parse(&["--follow", "somebody"]);
    assert_eq!(cli.action(), Some(Action::Follow("somebody".into())));

    let cli = parse(&["--unfollow", "somebody"]);
    assert_eq!(cli.action(), Some(Action::Unfollow("somebody".into())));
}

#[test]
fn like_retweet_delete_map_to_tweet_ids() {
    let cli = parse(&["--like", "123"]);
    assert_eq!(cli.action(), Some(Action::Like("123".into())));

    let cli = parse(&["--retweet", "123"]);
    assert_eq!(cli.action(), Some(Action::Retweet("123".into())));

    let cli = parse(&["--delete", "123"]);
    assert_eq!(cli.action(), Some(Action::Delete("123".into())));
}

#[test]
fn reply_maps_text_then_tweet_id() {
    let cli = parse(&["--reply", "nice post", "456"]);
    assert_eq!(
        cli.action(),
        Some(Action::Reply {
            text: "nice post".into(),
            tweet_id: "456".into(),
        })
    );
}

#[test]
fn search_maps_to_query() {
    let cli = parse(&["--search", "rust lang"]);
    assert_eq!(cli.action(), Some(Action::Search("rust lang".into())));
}

#[test]
fn download_media_maps_to_tweet_id() {
    let cli = parse(&["--download-media", "789"]);
    assert_eq!(cli.action(), Some(Action::DownloadMedia("789".into())));
}

#[test]
fn dm_maps_user_id_then_text() {
    let cli = parse(&["--dm", "42", "hello there"]);
    assert_eq!(
        cli.action(),
        Some(Action::Dm {
            user_id: "42".into(),
            text: "hello there".into(),
        })
    );
}

#[test]
fn no_flags_yields_no_action() {
    let cli = parse(&[]);
    assert_eq!(cli.action(), None);
}

#[test]
fn action_flags_are_mutually_exclusive() {
    assert!(Cli::try_parse_from(["xbot", "--tweet", "hi", "--like", "1"]).is_err());
    assert!(Cli::try_parse_from(["xbot", "--delete", "1", "--search", "q"]).is_err());
    assert!(
        Cli::try_parse_from(["xbot", "--follow", "a", "--unfollow", "b"]).is_err()
    );
}

#[test]
fn multi_value_flags_enforce_arity() {
    // --tweet-photo and --reply take exactly two values, --dm as well.
    assert!(Cli::try_parse_from(["xbot", "--tweet-photo", "caption"]).is_err());
    assert!(Cli::try_parse_from(["xbot", "--reply", "text"]).is_err());
    assert!(Cli::try_parse_from(["xbot", "--dm", "42"]).is_err());
    // --tweet-multiple-photos needs the text plus at least one path.
    assert!(Cli::try_parse_from(["xbot", "--tweet-multiple-photos", "caption"]).is_err());
}
