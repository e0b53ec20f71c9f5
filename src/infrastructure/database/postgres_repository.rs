use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewPost, NewUser, PageParams, Post, Repository, User};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    age: Option<i32>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            name: r.name,
            email: r.email,
            age: r.age,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    content: String,
    user_id: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            title: r.title,
            content: r.content,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

const USER_COLUMNS: &str = "id, name, email, age, created_at, updated_at";
const POST_COLUMNS: &str = "id, title, content, user_id, created_at, updated_at";

pub fn create_postgres_repository(pool: PgPool) -> crate::domain::RepositoryPtr {
    // ---
    std::sync::Arc::new(PostgresRepository::new(pool))
}

pub struct PostgresRepository {
    // ---
    pool: PgPool,
}

impl PostgresRepository {
    // ---
    pub fn new(pool: PgPool) -> Self {
        // ---
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Repository for PostgresRepository {
    // ---
    async fn list_users(&self) -> Result<Vec<User>> {
        // ---
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn list_users_page(&self, params: &PageParams) -> Result<(Vec<User>, i64)> {
        // ---
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((rows.into_iter().map(User::from).collect(), total))
    }

    async fn get_user(&self, user_id: i32) -> Result<Option<User>> {
        // ---
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        // ---
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(new_user.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        // ---
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, content, user_id) VALUES ($1, $2, $3) RETURNING {POST_COLUMNS}"
        ))
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_posts_by_user(&self, user_id: i32) -> Result<Vec<Post>> {
        // ---
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn current_time(&self) -> Result<DateTime<Utc>> {
        // ---
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }

    async fn server_version(&self) -> Result<String> {
        // ---
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await?;

        Ok(version)
    }
}
