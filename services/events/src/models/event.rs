//! Event model and related functionality

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Event entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub host_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// New event creation payload
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub host_id: i64,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Listing row: an event joined with its host's name and attendee count
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventSummary {
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub host_id: i64,
    pub host_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub attendee_count: i64,
}
