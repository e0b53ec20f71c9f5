//! Fills the database with a few users and their posts.
//!
//! Usage: `cargo run --bin seed` (reads `DATABASE_URL` from the environment
//! or `.env`).

use anyhow::{Context, Result};
use envelope_starter::domain::{NewPost, NewUser, Post};
use envelope_starter::{connect_with_retry, create_postgres_repository, run_migrations, DatabaseConfig};
use tracing::info;

const SEED_USERS: [(&str, &str, i32); 3] = [
    ("Alice", "alice@example.com", 25),
    ("Bob", "bob@example.com", 30),
    ("Charlie", "charlie@example.com", 35),
];

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = DatabaseConfig::from_env()?;

    info!("🌱 Seeding database...");

    let pool = connect_with_retry(&config).await?;
    run_migrations(&pool).await?;
    let repo = create_postgres_repository(pool);

    info!("Inserting users...");
    let mut users = Vec::with_capacity(SEED_USERS.len());
    for (name, email, age) in SEED_USERS {
        let user = repo
            .create_user(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                age: Some(age),
            })
            .await
            .with_context(|| format!("Failed to insert user {name}"))?;
        users.push(user);
    }
    info!("✅ Created {} users", users.len());

    info!("Inserting posts...");
    let mut posts: Vec<Post> = Vec::new();
    for user in &users {
        for (title, content) in [
            (
                format!("{}'s first post", user.name),
                format!("This is {}'s first post about PostgreSQL.", user.name),
            ),
            (
                format!("{}'s thoughts on life", user.name),
                format!("The weather is lovely today and {} is happy.", user.name),
            ),
        ] {
            let post = repo
                .create_post(NewPost {
                    title,
                    content,
                    user_id: user.id,
                })
                .await
                .with_context(|| format!("Failed to insert post for {}", user.name))?;
            posts.push(post);
        }
    }
    info!("✅ Created {} posts", posts.len());
    info!("🎉 Seeding complete!");

    Ok(())
}
