//! Event repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

use crate::models::{Event, EventSummary, NewEvent};

/// Event repository
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new event and return the stored row
    pub async fn create(&self, new_event: &NewEvent) -> DatabaseResult<Event> {
        info!(
            "Creating event '{}' hosted by user {}",
            new_event.title, new_event.host_id
        );

        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, description, host_id, start_time, end_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id, title, description, host_id, start_time, end_time
            "#,
        )
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.host_id)
        .bind(new_event.start_time)
        .bind(new_event.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    /// The full event collection ordered by ascending start time, each row
    /// joined with the host's name and attendee count. The ordering comes
    /// from the query on every call.
    pub async fn list_by_start_time(&self) -> DatabaseResult<Vec<EventSummary>> {
        sqlx::query_as::<_, EventSummary>(
            r#"
            SELECT e.event_id, e.title, e.description, e.host_id,
                   u.username AS host_name, e.start_time, e.end_time,
                   (SELECT COUNT(*) FROM attendees a WHERE a.event_id = e.event_id) AS attendee_count
            FROM events e
            JOIN users u ON u.user_id = e.host_id
            ORDER BY e.start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    /// Find an event by ID
    pub async fn find_by_id(&self, event_id: i64) -> DatabaseResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, host_id, start_time, end_time
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    /// Delete an event by ID. Returns whether a row was removed; attendance
    /// rows go with it (ON DELETE CASCADE).
    pub async fn delete(&self, event_id: i64) -> DatabaseResult<bool> {
        info!("Deleting event {}", event_id);

        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Record the user's attendance for an event. Registering twice is a
    /// no-op; returns whether a new row was inserted.
    pub async fn register_attendee(&self, event_id: i64, user_id: i64) -> DatabaseResult<bool> {
        info!("User {} attending event {}", user_id, event_id);

        let result = sqlx::query(
            r#"
            INSERT INTO attendees (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, user_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of users registered to attend an event
    pub async fn attendee_count(&self, event_id: i64) -> DatabaseResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM attendees WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await
                .map_err(DatabaseError::Query)?;

        Ok(count)
    }
}
