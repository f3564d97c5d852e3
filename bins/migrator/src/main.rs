//! Database migration runner for Simple Drive.
//!
//! The server applies pending migrations on startup; this binary is for
//! manual control. It connects to `DRIVE__DATABASE__URL` (falling back to
//! `DATABASE_URL`, then the server's default SQLite file).
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use drive_db::{connect, migration::Migrator};
use drive_shared::DatabaseConfig;
use sea_orm_migration::MigratorTrait;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sea_orm_migration=info,migrator=info".into()),
        )
        .init();

    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());

    let mut database = DatabaseConfig::default();
    if let Ok(url) = std::env::var("DRIVE__DATABASE__URL").or_else(|_| std::env::var("DATABASE_URL")) {
        database.url = url;
    }
    let db = connect(&database).await?;

    match command.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, Some(1)).await?,
        "status" => Migrator::status(&db).await?,
        "fresh" => Migrator::fresh(&db).await?,
        other => anyhow::bail!("unknown command '{other}', expected one of: up, down, status, fresh"),
    }

    info!(command = %command, "Migration command finished");
    Ok(())
}
