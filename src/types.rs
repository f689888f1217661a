//! X API v2 payload types, trimmed to the operations xbot performs.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Response Envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Standard API v2 response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The primary data
    #[serde(default)]
    pub data: Option<T>,

    /// Included expansions (media, users)
    #[serde(default)]
    pub includes: Option<Includes>,

    /// Metadata about the response
    #[serde(default)]
    pub meta: Option<ResponseMeta>,

    /// Errors (partial failures)
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

/// Included expansions in API responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Includes {
    /// Expanded media objects
    #[serde(default)]
    pub media: Vec<Media>,

    /// Expanded user objects
    #[serde(default)]
    pub users: Vec<User>,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Number of results
    #[serde(default)]
    pub result_count: Option<u32>,

    /// Token for next page
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Error object attached to an otherwise successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Error title
    #[serde(default)]
    pub title: Option<String>,

    /// Error detail
    #[serde(default)]
    pub detail: Option<String>,

    /// Resource ID that caused the error
    #[serde(default)]
    pub resource_id: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tweet and User Types
// ─────────────────────────────────────────────────────────────────────────────

/// Tweet object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet ID
    pub id: String,

    /// Tweet text content
    pub text: String,

    /// Author user ID
    #[serde(default)]
    pub author_id: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Attached media keys
    #[serde(default)]
    pub attachments: Option<Attachments>,
}

/// Tweet attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachments {
    /// Media keys
    #[serde(default)]
    pub media_keys: Option<Vec<String>>,
}

/// User object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Username (handle without @)
    pub username: String,
}

/// Media object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Media key
    pub media_key: String,

    /// Media type: "photo", "video", "animated_gif"
    #[serde(rename = "type")]
    pub media_type: String,

    /// Direct URL (present for photos)
    #[serde(default)]
    pub url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tweet Mutations
// ─────────────────────────────────────────────────────────────────────────────

/// Create tweet request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    /// Tweet text (required unless media is attached)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Reply target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<TweetReply>,

    /// Media attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<TweetMedia>,
}

/// Reply target for a created tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetReply {
    /// ID of the tweet being replied to
    pub in_reply_to_tweet_id: String,
}

/// Media attachments for a created tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetMedia {
    /// Uploaded media IDs
    pub media_ids: Vec<String>,
}

/// Create tweet response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTweetResponse {
    /// Created tweet data
    pub data: CreatedTweet,
}

/// Created tweet data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedTweet {
    /// Tweet ID
    pub id: String,

    /// Tweet text
    pub text: String,
}

/// Delete tweet response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTweetResponse {
    /// Deletion data
    pub data: DeletedTweet,
}

/// Deleted tweet data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedTweet {
    /// Whether deletion was successful
    pub deleted: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Engagement and Follow Graph
// ─────────────────────────────────────────────────────────────────────────────

/// Like response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    /// Like state
    pub data: LikeResult,
}

/// Like state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResult {
    /// Whether the tweet is now liked
    pub liked: bool,
}

/// Retweet response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetweetResponse {
    /// Retweet state
    pub data: RetweetResult,
}

/// Retweet state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetweetResult {
    /// Whether the tweet is now retweeted
    pub retweeted: bool,
}

/// Follow/unfollow response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    /// Follow state
    pub data: FollowResult,
}

/// Follow state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResult {
    /// Whether the source user now follows the target
    pub following: bool,

    /// Whether the follow is pending approval (protected accounts)
    #[serde(default)]
    pub pending_follow: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Media Upload and Direct Messages
// ─────────────────────────────────────────────────────────────────────────────

/// v1.1 media upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUploadResponse {
    /// Numeric media ID
    pub media_id: u64,

    /// Media ID as a string, as expected by the v2 tweet endpoint
    pub media_id_string: String,
}

/// Direct message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmResponse {
    /// Created DM event
    pub data: DmEvent,
}

/// Created DM event data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmEvent {
    /// Conversation the message was delivered to
    pub dm_conversation_id: String,

    /// ID of the created message event
    pub dm_event_id: String,
}
