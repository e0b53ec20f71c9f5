use super::models::{NewPost, NewUser, Post, User};
use super::page::PageParams;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Abstraction over user/post persistence.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    // ---
    /// List every user.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// List one page of users ordered by id, with the total user count.
    async fn list_users_page(&self, params: &PageParams) -> Result<(Vec<User>, i64)>;

    /// Get user by ID.
    async fn get_user(&self, user_id: i32) -> Result<Option<User>>;

    /// Insert a user and return the stored row.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Insert a post and return the stored row.
    async fn create_post(&self, new_post: NewPost) -> Result<Post>;

    /// List the posts written by a user.
    async fn list_posts_by_user(&self, user_id: i32) -> Result<Vec<Post>>;

    /// Database server clock, used as a liveness probe.
    async fn current_time(&self) -> Result<DateTime<Utc>>;

    /// Database server version string.
    async fn server_version(&self) -> Result<String>;
}

/// Type alias for any backend that implements Repository.
pub type RepositoryPtr = Arc<dyn Repository>;
