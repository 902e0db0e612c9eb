//! Error types for the payroll models.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the crate can report. Pay computation itself never
//! fails; only holiday accounting and roster loading do.

use thiserror::Error;

use crate::inheritance::HolidayRequest;

/// The main error type for the payroll models.
///
/// # Example
///
/// ```
/// use payroll_patterns::error::PayrollError;
/// use payroll_patterns::inheritance::HolidayRequest;
///
/// let error = PayrollError::InsufficientHolidayBalance {
///     request: HolidayRequest::Payout,
///     remaining: 3,
///     required: 5,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Insufficient holiday balance for a payout: 3 remaining, 5 required"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A holiday request asked for more days than the employee has left.
    ///
    /// The balance is never touched when this is returned.
    #[error("Insufficient holiday balance for {request}: {remaining} remaining, {required} required")]
    InsufficientHolidayBalance {
        /// The kind of request that was refused.
        request: HolidayRequest,
        /// The balance at the time of the request.
        remaining: u32,
        /// The number of days the request needed.
        required: u32,
    },

    /// A roster file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A roster file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
