use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Advisory lifecycle marker. Transitions between values are unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    #[default]
    Scheduled,
    Cancelled,
    Completed,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Scheduled => "scheduled",
            MeetingStatus::Cancelled => "cancelled",
            MeetingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingStatus {
    type Err = MeetingValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MeetingStatus::Scheduled),
            "cancelled" => Ok(MeetingStatus::Cancelled),
            "completed" => Ok(MeetingStatus::Completed),
            other => Err(MeetingValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Client-side input errors. The `Display` text is returned verbatim to
/// API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeetingValidationError {
    #[error("All fields are required")]
    MissingRequiredFields,

    #[error("{0} cannot be empty")]
    BlankField(&'static str),

    #[error("End time must be after start time")]
    EndTimeNotAfterStartTime,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid meeting ID")]
    InvalidMeetingId,
}
