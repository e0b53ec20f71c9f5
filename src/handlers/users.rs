//! User and post routes.
//!
//! Each function is plain business logic; the router wraps it with
//! `define_api_handler` / `define_simple_handler`.

use super::context::RequestContext;
use crate::domain::{NewUser, PageData, PageParams, Post, User};
use crate::envelope::{bad_request, not_found, ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Static payload served by `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleUser {
    // ---
    pub name: &'static str,
    pub age: u32,
    pub email: &'static str,
}

/// Body of `POST /users`. Fields are optional so that missing values reach
/// validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    // ---
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl CreateUserRequest {
    // ---
    /// Rejects a request unless both `name` and `email` are non-blank.
    pub fn validate(self) -> ApiResult<NewUser> {
        // ---
        let present = |field: Option<String>| field.filter(|value| !value.trim().is_empty());

        match (present(self.name), present(self.email)) {
            (Some(name), Some(email)) => Ok(NewUser {
                name,
                email,
                age: self.age,
            }),
            _ => Err(bad_request("name and email are required")),
        }
    }
}

/// GET /user
///
/// Example endpoint with no I/O.
pub async fn example_user(_ctx: RequestContext) -> Result<ExampleUser, ApiError> {
    // ---
    Ok(ExampleUser {
        name: "John Doe",
        age: 20,
        email: "john.doe@example.com",
    })
}

/// GET /users
#[tracing::instrument(skip(ctx))]
pub async fn list_users(ctx: RequestContext) -> ApiResult<Vec<User>> {
    // ---
    let users = ctx.state().repository().list_users().await?;
    Ok(users)
}

/// GET /users/page?pageIndex=1&pageSize=10
#[tracing::instrument(skip(ctx))]
pub async fn list_users_page(ctx: RequestContext) -> ApiResult<PageData<User>> {
    // ---
    let params: PageParams = ctx.query()?;
    params.validate().map_err(bad_request)?;

    let (users, total) = ctx.state().repository().list_users_page(&params).await?;

    Ok(PageData::new(users, total, &params))
}

/// POST /users
///
/// Expects `{ "name": ..., "email": ..., "age"?: ... }`. Responds with the
/// stored user.
#[tracing::instrument(skip(ctx))]
pub async fn create_user(ctx: RequestContext) -> ApiResult<User> {
    // ---
    let request: CreateUserRequest = ctx.read_body()?;
    let new_user = request.validate()?;

    let user = ctx.state().repository().create_user(new_user).await?;
    ctx.state().metrics().record_user_created();

    tracing::info!(user_id = user.id, "Created user");
    Ok(user)
}

/// GET /users/{id}/posts
#[tracing::instrument(skip(ctx))]
pub async fn list_user_posts(ctx: RequestContext) -> ApiResult<Vec<Post>> {
    // ---
    let user_id: i32 = ctx.path_param("id")?;
    let repository = ctx.state().repository();

    if repository.get_user(user_id).await?.is_none() {
        return Err(not_found().with_message("User not found"));
    }

    let posts = repository.list_posts_by_user(user_id).await?;
    Ok(posts)
}
