// Test helpers are intentionally partially used
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use envelope_starter::domain::{NewPost, NewUser, PageParams, Post, Repository, RepositoryPtr, User};
use envelope_starter::{create_noop_metrics, create_router, AppState};
use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower::ServiceExt;

// ============================================================================
// Repositories
// ============================================================================

/// Repository kept in memory, enforcing the same constraints as the schema
/// (unique email, post author must exist).
#[derive(Default)]
pub struct InMemoryRepository {
    // ---
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
}

impl InMemoryRepository {
    // ---
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait::async_trait]
impl Repository for InMemoryRepository {
    // ---
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn list_users_page(&self, params: &PageParams) -> Result<(Vec<User>, i64)> {
        // ---
        let users = self.users.lock().unwrap();
        let page = users
            .iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .cloned()
            .collect();
        Ok((page, users.len() as i64))
    }

    async fn get_user(&self, user_id: i32) -> Result<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        // ---
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(anyhow!(
                "duplicate key value violates unique constraint \"users_email_unique\""
            ));
        }

        let now = Utc::now().naive_utc();
        let user = User {
            id: users.len() as i32 + 1,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        // ---
        if !self.users.lock().unwrap().iter().any(|u| u.id == new_post.user_id) {
            return Err(anyhow!("insert or update on table \"posts\" violates foreign key constraint"));
        }

        let mut posts = self.posts.lock().unwrap();
        let now = Utc::now().naive_utc();
        let post = Post {
            id: posts.len() as i32 + 1,
            title: new_post.title,
            content: new_post.content,
            user_id: new_post.user_id,
            created_at: now,
            updated_at: now,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts_by_user(&self, user_id: i32) -> Result<Vec<Post>> {
        // ---
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn current_time(&self) -> Result<DateTime<Utc>> {
        Ok(Utc::now())
    }

    async fn server_version(&self) -> Result<String> {
        Ok("PostgreSQL 16.4 (in-memory)".to_string())
    }
}

/// Repository whose every call fails, as if the database were unreachable.
pub struct UnreachableRepository;

const UNREACHABLE: &str = "connection refused (os error 111)";

#[async_trait::async_trait]
impl Repository for UnreachableRepository {
    // ---
    async fn list_users(&self) -> Result<Vec<User>> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn list_users_page(&self, _params: &PageParams) -> Result<(Vec<User>, i64)> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn get_user(&self, _user_id: i32) -> Result<Option<User>> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn create_user(&self, _new_user: NewUser) -> Result<User> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn create_post(&self, _new_post: NewPost) -> Result<Post> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn list_posts_by_user(&self, _user_id: i32) -> Result<Vec<Post>> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn current_time(&self) -> Result<DateTime<Utc>> {
        Err(anyhow!(UNREACHABLE))
    }
    async fn server_version(&self) -> Result<String> {
        Err(anyhow!(UNREACHABLE))
    }
}

// ============================================================================
// Router helpers
// ============================================================================

/// Router over the given repository with no-op metrics.
pub fn test_app(repository: RepositoryPtr) -> Router {
    // ---
    let metrics = create_noop_metrics().expect("noop metrics");
    create_router(AppState::new(repository, metrics))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    // ---
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is not JSON).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    // ---
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ============================================================================
// Live server
// ============================================================================

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new(app: Router) -> Self {
        // ---
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
