use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Envelope Starter API 👋
Version: {version}

Available endpoints:
  - GET    /user                - Example user (no database)
  - GET    /users               - List users
  - GET    /users/page          - List users page by page (?pageIndex=1&pageSize=10)
  - POST   /users               - Create a user ({{"name", "email", "age"?}})
  - GET    /users/{{id}}/posts    - List a user's posts
  - GET    /health              - Database health check
  - GET    /db-version          - PostgreSQL version
  - GET    /metrics             - Prometheus metrics

Every JSON endpoint answers with {{"success", "message"?, "data"?}}.
"#
    )
}
