use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgSslMode},
};
use std::{str::FromStr, sync::Arc};

pub mod account;
pub mod country;

pub mod models {
    pub mod account;
    pub mod country;
}

pub mod dtos {
    pub mod country;
}

/// Connects to Postgres, creating the target database on first run,
/// and applies pending migrations.
pub async fn setup(
    database_url: &str,
    require_ssl: bool,
) -> Result<Arc<PgPool>, Box<dyn std::error::Error>> {
    ensure_database(database_url, require_ssl).await?;

    let mut options = PgConnectOptions::from_str(database_url)?;
    if require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }
    let pool = PgPool::connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}

/// Creates the database named in `database_url` if it does not exist yet,
/// going through the maintenance database on the same host.
async fn ensure_database(
    database_url: &str,
    require_ssl: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = url::Url::parse(database_url)?;
    let db_name = url.path().trim_start_matches('/');

    let admin_url = format!(
        "postgresql://{}:{}@{}:{}/postgres",
        url.username(),
        url.password().unwrap_or(""),
        url.host_str().unwrap_or("localhost"),
        url.port().unwrap_or(5432)
    );

    let mut admin_options = PgConnectOptions::from_str(&admin_url)?;
    if require_ssl {
        admin_options = admin_options.ssl_mode(PgSslMode::Require);
    }
    let admin_pool = PgPool::connect_with(admin_options).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&admin_pool)
            .await?;

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name))
            .execute(&admin_pool)
            .await?;
    }

    admin_pool.close().await;
    Ok(())
}
