//! Startup schema initialization

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

// Username uniqueness lives in the schema, not only in the registration
// lookup, so concurrent registrations cannot both insert the same name.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS events (
        event_id BIGSERIAL PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        description VARCHAR(100) NOT NULL DEFAULT '',
        host_id BIGINT NOT NULL REFERENCES users (user_id),
        start_time TIMESTAMP NOT NULL,
        end_time TIMESTAMP NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendees (
        event_id BIGINT NOT NULL REFERENCES events (event_id) ON DELETE CASCADE,
        user_id BIGINT NOT NULL REFERENCES users (user_id),
        registered_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (event_id, user_id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_events_start_time ON events (start_time)
    "#,
];

/// Create any missing tables. Runs once at startup, before the listener is
/// bound; request handlers never touch DDL.
pub async fn ensure(pool: &PgPool) -> DatabaseResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))?;
    }

    info!("Database schema ready");
    Ok(())
}
