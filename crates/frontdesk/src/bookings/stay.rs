use chrono::NaiveDate;
use serde::Serialize;

/// Length and price of a stay, in nights and cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub nightly_rate: u64,
    pub total: u64,
}

impl StayQuote {
    pub fn for_dates(
        check_in: NaiveDate,
        check_out: NaiveDate,
        nightly_rate: u64,
    ) -> Result<Self, StayError> {
        let nights = stay_length(check_in, check_out)?;
        let total = nightly_rate
            .checked_mul(u64::from(nights))
            .ok_or(StayError::Overflow)?;

        Ok(Self {
            check_in,
            check_out,
            nights,
            nightly_rate,
            total,
        })
    }
}

/// Number of nights between check-in and check-out.
pub fn stay_length(check_in: NaiveDate, check_out: NaiveDate) -> Result<u32, StayError> {
    let days = (check_out - check_in).num_days();
    if days <= 0 {
        return Err(StayError::InvalidDates {
            check_in,
            check_out,
        });
    }
    u32::try_from(days).map_err(|_| StayError::Overflow)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StayError {
    #[error("check-out {check_out} must fall after check-in {check_in}")]
    InvalidDates {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("stay price exceeds representable range")]
    Overflow,
}
