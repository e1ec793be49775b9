//! Parsing and ordering rules for meeting schedule fields.
//!
//! Dates are calendar dates (`YYYY-MM-DD`; an RFC 3339 timestamp is accepted
//! and reduced to its UTC date). Times are clock times (`HH:MM` or
//! `HH:MM:SS[.fff]`) compared on a common reference day.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::modules::meeting::application::domain::entities::MeetingValidationError;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Returns the value only if it contains something other than whitespace.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_meeting_id(raw: &str) -> Result<Uuid, MeetingValidationError> {
    Uuid::parse_str(raw.trim()).map_err(|_| MeetingValidationError::InvalidMeetingId)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, MeetingValidationError> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| MeetingValidationError::InvalidDate(raw.to_string()))
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, MeetingValidationError> {
    let raw = raw.trim();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| MeetingValidationError::InvalidTime(raw.to_string()))
}

pub fn ensure_time_order(
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<(), MeetingValidationError> {
    if start_time < end_time {
        Ok(())
    } else {
        Err(MeetingValidationError::EndTimeNotAfterStartTime)
    }
}
