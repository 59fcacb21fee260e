//! The narrow platform contract.

use std::path::Path;
use vermeer_error::ClientError;

/// Result alias for platform calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// An inbound mention of the agent's account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    /// Opaque platform identifier (fullname)
    pub id: String,
    /// Mention body text
    pub text: String,
    /// Author username
    pub author: String,
}

/// The external platform collaborator.
///
/// Implementations perform real network calls; callers reach them only
/// through [`Backoff`](crate::Backoff), and treat an exhausted retry budget
/// as fatal for the current tick.
#[async_trait::async_trait]
pub trait Platform: Send + Sync {
    /// Authenticated account name.
    async fn me(&self) -> ClientResult<String>;

    /// Publish an image post; returns the new post id.
    async fn submit_image_post(
        &self,
        community: &str,
        title: &str,
        image_path: &Path,
    ) -> ClientResult<String>;

    /// Publish a link post; returns the new post id.
    async fn submit_link_post(
        &self,
        community: &str,
        title: &str,
        url: &str,
    ) -> ClientResult<String>;

    /// Publish a text post; returns the new post id.
    async fn submit_text_post(
        &self,
        community: &str,
        title: &str,
        body: &str,
    ) -> ClientResult<String>;

    /// Upvote an item by fullname.
    async fn upvote(&self, item_id: &str) -> ClientResult<()>;

    /// Reply to an item by fullname.
    async fn reply(&self, item_id: &str, text: &str) -> ClientResult<()>;

    /// Fetch up to `limit` recent inbound mentions.
    async fn fetch_mentions(&self, limit: u32) -> ClientResult<Vec<Mention>>;
}
