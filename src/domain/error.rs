use chrono::NaiveDate;
use color_eyre::eyre::Report;
use thiserror::Error;

use super::session::ALERT_DEADLINE_PASSED;

#[derive(Debug, Error)]
pub enum ShiftAPIError {
    #[error("Administrator role required")]
    AdminRequired,
    #[error("Conflicting resource: {0}")]
    Conflict(String),
    #[error("Submission deadline has passed: {0}")]
    DeadlinePassed(NaiveDate),
    #[error("Invalid session")]
    InvalidSession,
    #[error("Missing session")]
    MissingSession,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

impl ShiftAPIError {
    /// Text shown to whoever triggered the error. Unexpected errors are not
    /// described beyond the fact that they happened.
    pub fn user_message(&self) -> String {
        match self {
            Self::DeadlinePassed(_) => ALERT_DEADLINE_PASSED.to_owned(),
            Self::ValidationError(e) => e.as_ref().to_owned(),
            e => e.to_string(),
        }
    }
}

impl PartialEq for ShiftAPIError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AdminRequired, Self::AdminRequired)
            | (Self::InvalidSession, Self::InvalidSession)
            | (Self::MissingSession, Self::MissingSession)
            | (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            (Self::Conflict(a), Self::Conflict(b))
            | (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::DeadlinePassed(a), Self::DeadlinePassed(b)) => a == b,
            (Self::ValidationError(a), Self::ValidationError(b)) => {
                a.as_ref() == b.as_ref()
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
