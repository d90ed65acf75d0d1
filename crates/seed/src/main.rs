//! `embr-seed` -- one-shot database seeder.
//!
//! Populates the store with fixed sample rows: 5 todos plus 2 users with
//! nested posts. Runs once at provisioning time, independent of the API
//! server. Exits non-zero on any failure; the pool is closed on both the
//! success and the failure path.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                  |
//! |----------------|----------|------------------------------|
//! | `DATABASE_URL` | yes      | PostgreSQL connection string |

use anyhow::Context;

use embr_db::models::post::CreatePost;
use embr_db::models::user::CreateUser;
use embr_db::repositories::{TodoRepo, UserRepo};
use embr_db::DbPool;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed todo fixtures: (title, completed).
const TODOS: [(&str, bool); 5] = [
    ("Set up Embr project", true),
    ("Configure sqlx with PostgreSQL", true),
    ("Test database provisioning", false),
    ("Deploy to production", false),
    ("Verify schema sync works", false),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "embr_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        eprintln!("Seed failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = embr_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    embr_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let result = seed(&pool).await;

    // Release all connections before exiting, success or failure.
    pool.close().await;

    result
}

async fn seed(pool: &DbPool) -> anyhow::Result<()> {
    tracing::info!("Seeding database");

    for (title, completed) in TODOS {
        TodoRepo::create(pool, title, completed)
            .await
            .with_context(|| format!("Failed to create todo: {title}"))?;
    }
    tracing::info!(count = TODOS.len(), "Created todos");

    let alice = UserRepo::create_with_posts(
        pool,
        &CreateUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            posts: vec![
                CreatePost {
                    title: "Getting started with Embr".to_string(),
                    content: Some("Embr makes deployment easy!".to_string()),
                    published: true,
                },
                CreatePost {
                    title: "sqlx + PostgreSQL".to_string(),
                    content: Some("Schema management is automatic.".to_string()),
                    published: true,
                },
            ],
        },
    )
    .await
    .context("Failed to create user Alice")?;

    let bob = UserRepo::create_with_posts(
        pool,
        &CreateUser {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            posts: vec![CreatePost {
                title: "Database seeding".to_string(),
                content: Some("Seeds run on first deployment.".to_string()),
                published: false,
            }],
        },
    )
    .await
    .context("Failed to create user Bob")?;

    tracing::info!(
        users = %format!("{}, {}", alice.user.name, bob.user.name),
        posts = alice.posts.len() + bob.posts.len(),
        "Created users with posts"
    );

    tracing::info!("Seeding complete");

    Ok(())
}
