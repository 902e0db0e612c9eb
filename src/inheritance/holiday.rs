//! Holiday accounting shared by every employee variant.
//!
//! A holiday request either consumes a single day or pays out a fixed block
//! of [`FIXED_VACATION_DAYS_PAYOUT`] days. The balance is checked before it is
//! touched, so a refused request leaves the employee exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};

use super::employee::EmployeeProfile;

/// Vacation balance a new employee starts with.
pub const DEFAULT_VACATION_DAYS: u32 = 25;

/// The fixed number of vacation days consumed by a payout.
pub const FIXED_VACATION_DAYS_PAYOUT: u32 = 5;

const SINGLE_DAY_MESSAGE: &str = "Have fun on your holiday. Don't forget to check your emails!";

/// The kind of holiday an employee asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayRequest {
    /// Take one day off.
    SingleDay,
    /// Convert a fixed block of unused days; no money is modelled.
    Payout,
}

impl HolidayRequest {
    /// Maps the `payout` flag of [`Employee::take_a_holiday`](super::Employee::take_a_holiday).
    pub fn from_payout(payout: bool) -> Self {
        if payout {
            HolidayRequest::Payout
        } else {
            HolidayRequest::SingleDay
        }
    }

    /// Number of days this request consumes.
    pub fn days_required(&self) -> u32 {
        match self {
            HolidayRequest::SingleDay => 1,
            HolidayRequest::Payout => FIXED_VACATION_DAYS_PAYOUT,
        }
    }
}

impl fmt::Display for HolidayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayRequest::SingleDay => f.write_str("a single day off"),
            HolidayRequest::Payout => f.write_str("a payout"),
        }
    }
}

/// The result of a granted holiday request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOutcome {
    /// The request that was granted.
    pub request: HolidayRequest,
    /// Days removed from the balance.
    pub days_deducted: u32,
    /// Balance after the deduction.
    pub remaining: u32,
    /// Human-readable confirmation.
    pub message: String,
}

impl EmployeeProfile {
    /// Checks the balance against `request` and deducts on success.
    pub(crate) fn request_holiday(
        &mut self,
        request: HolidayRequest,
    ) -> PayrollResult<HolidayOutcome> {
        let required = request.days_required();

        let Some(remaining) = self.vacation_days.checked_sub(required) else {
            warn!(
                employee = %self.name,
                request = %request,
                remaining = self.vacation_days,
                required,
                "Holiday request refused"
            );
            return Err(PayrollError::InsufficientHolidayBalance {
                request,
                remaining: self.vacation_days,
                required,
            });
        };

        self.vacation_days = remaining;

        let message = match request {
            HolidayRequest::Payout => format!("Paying out a holiday. Holidays left: {}", remaining),
            HolidayRequest::SingleDay => SINGLE_DAY_MESSAGE.to_string(),
        };

        info!(
            employee = %self.name,
            request = %request,
            remaining,
            "Holiday request granted"
        );

        Ok(HolidayOutcome {
            request,
            days_deducted: required,
            remaining,
            message,
        })
    }
}
