//! Reddit implementation of the platform contract.
//!
//! Uses the script-app OAuth password grant against `www.reddit.com` and the
//! JSON endpoints on `oauth.reddit.com`. Nothing outside this module knows
//! about Reddit's wire format.

use crate::{ClientResult, Mention, Platform};
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};
use vermeer_error::{ClientError, ClientErrorKind};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

// Refresh this long before the token's stated expiry.
const TOKEN_SLACK: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct Token {
    value: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    json: SubmitJson,
}

#[derive(Debug, Deserialize)]
struct SubmitJson {
    #[serde(default)]
    errors: Vec<serde_json::Value>,
    #[serde(default)]
    data: Option<SubmitData>,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
struct Thing {
    kind: String,
    data: ThingData,
}

#[derive(Debug, Deserialize)]
struct ThingData {
    name: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    author: String,
}

#[derive(Debug, Deserialize)]
struct MediaLease {
    args: LeaseArgs,
    asset: LeaseAsset,
}

#[derive(Debug, Deserialize)]
struct LeaseArgs {
    action: String,
    fields: Vec<LeaseField>,
}

#[derive(Debug, Deserialize)]
struct LeaseField {
    name: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct LeaseAsset {
    asset_id: String,
}

/// Reddit client for a script application.
///
/// Holds the OAuth token behind a mutex and refreshes it shortly before
/// expiry; all calls go through [`authed`](Self::me) helpers that attach it.
///
/// # Example
/// ```no_run
/// use vermeer_client::{Platform, RedditClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let settings = vermeer_core::Settings::from_env()?;
///     let client = RedditClient::connect(&settings).await?;
///     println!("Authenticated as: u/{}", client.me().await?);
///     Ok(())
/// }
/// ```
pub struct RedditClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    token: Mutex<Option<Token>>,
}

impl RedditClient {
    /// Create a client and authenticate immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ClientErrorKind::Authentication`] if the credentials are
    /// rejected; this is the one condition the process treats as fatal.
    #[instrument(skip(settings), fields(username = %settings.username))]
    pub async fn connect(settings: &vermeer_core::Settings) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| {
                ClientError::new(ClientErrorKind::Transport(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let client = Self {
            http,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            token: Mutex::new(None),
        };

        client.refresh_token().await?;
        info!("Authenticated with Reddit");
        Ok(client)
    }

    async fn refresh_token(&self) -> ClientResult<String> {
        debug!("Requesting OAuth token");

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ClientError::new(ClientErrorKind::Authentication(format!(
                "Token request rejected with status {}",
                status
            ))));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::new(ClientErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Authentication(e.to_string())))?;

        let token = Token {
            value: parsed.access_token,
            expires_at: Instant::now() + Duration::from_secs(parsed.expires_in)
                - TOKEN_SLACK.min(Duration::from_secs(parsed.expires_in)),
        };

        let value = token.value.clone();
        *self.token.lock().await = Some(token);
        Ok(value)
    }

    async fn current_token(&self) -> ClientResult<String> {
        {
            let guard = self.token.lock().await;
            if let Some(token) = guard.as_ref() {
                if Instant::now() < token.expires_at {
                    return Ok(token.value.clone());
                }
            }
        }
        self.refresh_token().await
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::new(ClientErrorKind::Api {
            status_code: status.as_u16(),
            message,
        }))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let token = self.current_token().await?;
        let response = self
            .http
            .get(format!("{}{}", API_BASE, path))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Transport(e.to_string())))?;

        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::MalformedResponse(e.to_string())))
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> ClientResult<reqwest::Response> {
        let token = self.current_token().await?;
        let response = self
            .http
            .post(format!("{}{}", API_BASE, path))
            .bearer_auth(token)
            .form(form)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Transport(e.to_string())))?;

        Self::check_status(response).await
    }

    async fn submit(&self, form: &[(&str, &str)]) -> ClientResult<String> {
        let response = self.post_form("/api/submit", form).await?;

        let parsed: SubmitResponse = response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::MalformedResponse(e.to_string())))?;

        if !parsed.json.errors.is_empty() {
            return Err(ClientError::new(ClientErrorKind::Api {
                status_code: 200,
                message: format!("Submission rejected: {:?}", parsed.json.errors),
            }));
        }

        let id = parsed
            .json
            .data
            .and_then(|d| d.name.or(d.id))
            .ok_or_else(|| {
                ClientError::new(ClientErrorKind::MalformedResponse(
                    "Submission response carried no post id".to_string(),
                ))
            })?;
        Ok(id)
    }

    /// Upload a local image and return its asset URL for submission.
    async fn upload_image(&self, image_path: &Path) -> ClientResult<String> {
        let filename = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.png")
            .to_string();
        let mimetype = match image_path.extension().and_then(|e| e.to_str()) {
            Some("png") => "image/png",
            _ => "image/jpeg",
        };

        let lease_response = self
            .post_form(
                "/api/media/asset.js",
                &[("filepath", filename.as_str()), ("mimetype", mimetype)],
            )
            .await?;
        let lease: MediaLease = lease_response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::MalformedResponse(e.to_string())))?;

        let bytes = tokio::fs::read(image_path).await.map_err(|e| {
            ClientError::new(ClientErrorKind::Transport(format!(
                "Failed to read {}: {}",
                image_path.display(),
                e
            )))
        })?;

        let mut form = reqwest::multipart::Form::new();
        for field in &lease.args.fields {
            form = form.text(field.name.clone(), field.value.clone());
        }
        form = form.part(
            "file",
            reqwest::multipart::Part::bytes(bytes).file_name(filename),
        );

        // Lease actions come back protocol-relative.
        let action = if lease.args.action.starts_with("//") {
            format!("https:{}", lease.args.action)
        } else {
            lease.args.action.clone()
        };

        let upload = self
            .http
            .post(&action)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorKind::Transport(e.to_string())))?;
        Self::check_status(upload).await?;

        Ok(format!(
            "https://reddit-uploaded-media.s3-accelerate.amazonaws.com/{}",
            lease.asset.asset_id
        ))
    }
}

#[async_trait::async_trait]
impl Platform for RedditClient {
    #[instrument(skip(self))]
    async fn me(&self) -> ClientResult<String> {
        let me: MeResponse = self.get_json("/api/v1/me").await?;
        Ok(me.name)
    }

    #[instrument(skip(self, image_path), fields(image = %image_path.display()))]
    async fn submit_image_post(
        &self,
        community: &str,
        title: &str,
        image_path: &Path,
    ) -> ClientResult<String> {
        let asset_url = self.upload_image(image_path).await?;
        self.submit(&[
            ("sr", community),
            ("kind", "image"),
            ("title", title),
            ("url", asset_url.as_str()),
            ("sendreplies", "false"),
            ("api_type", "json"),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn submit_link_post(
        &self,
        community: &str,
        title: &str,
        url: &str,
    ) -> ClientResult<String> {
        self.submit(&[
            ("sr", community),
            ("kind", "link"),
            ("title", title),
            ("url", url),
            ("sendreplies", "false"),
            ("api_type", "json"),
        ])
        .await
    }

    #[instrument(skip(self, body))]
    async fn submit_text_post(
        &self,
        community: &str,
        title: &str,
        body: &str,
    ) -> ClientResult<String> {
        self.submit(&[
            ("sr", community),
            ("kind", "self"),
            ("title", title),
            ("text", body),
            ("sendreplies", "false"),
            ("api_type", "json"),
        ])
        .await
    }

    #[instrument(skip(self))]
    async fn upvote(&self, item_id: &str) -> ClientResult<()> {
        self.post_form("/api/vote", &[("id", item_id), ("dir", "1")])
            .await?;
        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn reply(&self, item_id: &str, text: &str) -> ClientResult<()> {
        self.post_form("/api/comment", &[("thing_id", item_id), ("text", text)])
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_mentions(&self, limit: u32) -> ClientResult<Vec<Mention>> {
        let listing: Listing = self
            .get_json(&format!("/message/unread?limit={}", limit))
            .await?;

        let mentions = listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == "t1")
            .map(|thing| Mention {
                id: thing.data.name,
                text: thing.data.body,
                author: thing.data.author,
            })
            .collect();
        Ok(mentions)
    }
}
