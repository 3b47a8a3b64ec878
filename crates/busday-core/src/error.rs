//! Error types for the Busday library.
//!
//! Counting never fails: empty and inverted ranges count as zero. Errors only
//! arise when building dates, holiday rules, or calendars from external input.

use thiserror::Error;

/// A specialized Result type for Busday operations.
pub type BusdayResult<T> = Result<T, BusdayError>;

/// The main error type for Busday operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusdayError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A holiday rule that can never produce a valid date.
    #[error("Invalid holiday rule: {reason}")]
    InvalidHoliday {
        /// Why the rule was rejected.
        reason: String,
    },

    /// Calendar loading or serialization error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl BusdayError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid holiday rule error.
    #[must_use]
    pub fn invalid_holiday(reason: impl Into<String>) -> Self {
        Self::InvalidHoliday {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
