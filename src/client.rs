//! Authenticated X API client.

use std::path::Path;

use reqwest::{Client, Method, Response, header, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::{ApiConfig, Credentials},
    error::{XbotError, XbotResult},
    oauth::OAuthSigner,
    types::{
        ApiResponse, CreateTweetRequest, CreateTweetResponse, DeleteTweetResponse, DmResponse,
        FollowResponse, LikeResponse, MediaUploadResponse, RetweetResponse, Tweet, User,
    },
};

/// Fallback error body for responses that are not valid JSON.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// X REST API client.
///
/// Every user-context request carries an OAuth 1.0a `Authorization`
/// header; media bytes are fetched with a plain unauthenticated GET.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    api_url: String,
    upload_url: String,
    signer: OAuthSigner,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(credentials: &Credentials, config: &ApiConfig) -> XbotResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("xbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            upload_url: config.upload_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(credentials),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> XbotResult<T> {
        self.request(Method::GET, endpoint, params, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> XbotResult<T> {
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> XbotResult<T> {
        self.request(Method::DELETE, endpoint, &[], None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
        body: Option<&B>,
    ) -> XbotResult<T> {
        let url = format!("{}{}", self.api_url, endpoint);
        let auth_header = self.signer.sign(method.as_str(), &url, params)?;

        debug!(%method, endpoint, "issuing API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::AUTHORIZATION, auth_header);

        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> XbotResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(XbotError::from);
        }

        let error_body: ApiErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
        let message = error_body
            .detail
            .or(error_body.title)
            .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());

        Err(XbotError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the authenticated user.
    pub async fn get_me(&self) -> XbotResult<ApiResponse<User>> {
        self.get("/2/users/me", &[]).await
    }

    /// Get a user by username.
    pub async fn get_user_by_username(&self, username: &str) -> XbotResult<ApiResponse<User>> {
        self.get(&format!("/2/users/by/username/{username}"), &[])
            .await
    }

    /// Follow a user on behalf of `user_id`.
    pub async fn follow(&self, user_id: &str, target_user_id: &str) -> XbotResult<FollowResponse> {
        #[derive(Serialize)]
        struct FollowBody<'a> {
            target_user_id: &'a str,
        }

        self.post(
            &format!("/2/users/{user_id}/following"),
            &FollowBody { target_user_id },
        )
        .await
    }

    /// Unfollow a user on behalf of `user_id`.
    pub async fn unfollow(
        &self,
        user_id: &str,
        target_user_id: &str,
    ) -> XbotResult<FollowResponse> {
        self.delete(&format!("/2/users/{user_id}/following/{target_user_id}"))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tweet endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new tweet.
    pub async fn create_tweet(
        &self,
        request: &CreateTweetRequest,
    ) -> XbotResult<CreateTweetResponse> {
        self.post("/2/tweets", request).await
    }

    /// Delete a tweet.
    pub async fn delete_tweet(&self, tweet_id: &str) -> XbotResult<DeleteTweetResponse> {
        self.delete(&format!("/2/tweets/{tweet_id}")).await
    }

    /// Get a tweet with its media expansion payload.
    pub async fn get_tweet_media(&self, tweet_id: &str) -> XbotResult<ApiResponse<Tweet>> {
        let params = vec![
            ("expansions".to_string(), "attachments.media_keys".to_string()),
            ("media.fields".to_string(), "media_key,type,url".to_string()),
        ];
        self.get(&format!("/2/tweets/{tweet_id}"), &params).await
    }

    /// Get a user's recent tweets.
    pub async fn get_user_tweets(
        &self,
        user_id: &str,
        max_results: u32,
    ) -> XbotResult<ApiResponse<Vec<Tweet>>> {
        let params = vec![
            ("tweet.fields".to_string(), "id,text,created_at".to_string()),
            ("max_results".to_string(), max_results.to_string()),
        ];
        self.get(&format!("/2/users/{user_id}/tweets"), &params)
            .await
    }

    /// Search recent tweets (last 7 days).
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
    ) -> XbotResult<ApiResponse<Vec<Tweet>>> {
        let params = vec![
            ("query".to_string(), query.to_string()),
            (
                "tweet.fields".to_string(),
                "id,text,author_id,created_at".to_string(),
            ),
            ("max_results".to_string(), max_results.to_string()),
        ];
        self.get("/2/tweets/search/recent", &params).await
    }

    /// Like a tweet on behalf of `user_id`.
    pub async fn like(&self, user_id: &str, tweet_id: &str) -> XbotResult<LikeResponse> {
        #[derive(Serialize)]
        struct LikeBody<'a> {
            tweet_id: &'a str,
        }

        self.post(&format!("/2/users/{user_id}/likes"), &LikeBody { tweet_id })
            .await
    }

    /// Retweet a tweet on behalf of `user_id`.
    pub async fn retweet(&self, user_id: &str, tweet_id: &str) -> XbotResult<RetweetResponse> {
        #[derive(Serialize)]
        struct RetweetBody<'a> {
            tweet_id: &'a str,
        }

        self.post(
            &format!("/2/users/{user_id}/retweets"),
            &RetweetBody { tweet_id },
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Media and direct messages
    // ─────────────────────────────────────────────────────────────────────────

    /// Upload a local media file via the v1.1 multipart endpoint.
    pub async fn upload_media(&self, path: &Path) -> XbotResult<MediaUploadResponse> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media".to_string());

        let url = format!("{}/1.1/media/upload.json", self.upload_url);
        // Multipart bodies are excluded from the OAuth signature.
        let auth_header = self.signer.sign("POST", &url, &[])?;

        debug!(path = %path.display(), "uploading media");

        let form =
            multipart::Form::new().part("media", multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, auth_header)
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch raw media bytes from a CDN URL.
    pub async fn fetch_media(&self, url: &str) -> XbotResult<Vec<u8>> {
        debug!(url, "fetching media bytes");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(XbotError::Api {
                status: status.as_u16(),
                message: format!("media fetch failed for {url}"),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Send a direct message to `participant_id`.
    pub async fn send_direct_message(
        &self,
        participant_id: &str,
        text: &str,
    ) -> XbotResult<DmResponse> {
        #[derive(Serialize)]
        struct DmBody<'a> {
            text: &'a str,
        }

        self.post(
            &format!("/2/dm_conversations/with/{participant_id}/messages"),
            &DmBody { text },
        )
        .await
    }
}
