//! Form input validation
//!
//! Every check short-circuits: the first violated rule wins and nothing is
//! persisted on failure.

use chrono::NaiveDateTime;

use crate::error::ValidationError;

/// Fixed timestamp format accepted by the event form (date and time, no zone)
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const TITLE_MAX_LEN: usize = 100;
const DESCRIPTION_MAX_LEN: usize = 100;

/// Reject an absent or empty form field
fn require(value: Option<&str>, missing: ValidationError) -> Result<&str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing),
    }
}

/// Parse a form timestamp in the fixed `YYYY-MM-DDTHH:MM` format
pub fn parse_event_time(value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value, EVENT_TIME_FORMAT)
        .map_err(|_| ValidationError::MalformedTimestamp)
}

/// Check the registration form: username present, then password present
pub fn validate_registration(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(String, String), ValidationError> {
    let username = require(username, ValidationError::MissingUsername)?;
    let password = require(password, ValidationError::MissingPassword)?;

    Ok((username.to_string(), password.to_string()))
}

/// Validated new-event form output
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Check the new-event form: title present, start time present, end time
/// present, length limits, parseable times, end not before start.
pub fn validate_event_form(
    title: Option<&str>,
    description: Option<&str>,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> Result<EventInput, ValidationError> {
    let title = require(title, ValidationError::MissingTitle)?;
    let start_time = require(start_time, ValidationError::MissingStartTime)?;
    let end_time = require(end_time, ValidationError::MissingEndTime)?;

    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ValidationError::TitleTooLong);
    }

    let description = description.unwrap_or_default();
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }

    let start_time = parse_event_time(start_time)?;
    let end_time = parse_event_time(end_time)?;

    if end_time < start_time {
        return Err(ValidationError::EndBeforeStart);
    }

    Ok(EventInput {
        title: title.to_string(),
        description: description.to_string(),
        start_time,
        end_time,
    })
}
