use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod middleware;
mod models;
mod password;
mod repositories;
mod routes;
mod schema;
mod session;
mod validation;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::repositories::{EventRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub events: EventRepository,
    signing_key: Key,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool, signing_key: Key) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool),
            signing_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.signing_key.clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting event service");

    // Initialize database connection pool
    let db_config = common::database::DatabaseConfig::from_env()?;
    let pool = common::database::init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Schema is created here, before the listener starts, never per-request
    schema::ensure(&pool).await?;

    let app_state = AppState::new(pool, session::signing_key_from_env());

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Event service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
