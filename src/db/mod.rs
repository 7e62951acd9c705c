use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

/// Connection pool for the reservation store. `DATABASE_URL` overrides the
/// default on-disk database, which is created on first run.
pub async fn get_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:hotel.db?mode=rwc".to_string());

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create pool")
}
