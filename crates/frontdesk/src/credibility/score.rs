use serde::{Deserialize, Serialize};
use std::fmt;

use super::CredibilityError;

pub const BASE_SCORE: i64 = 50;
pub const COMPLETED_STAY_DELTA: i64 = 10;
pub const CANCELLATION_DELTA: i64 = -10;
pub const NO_SHOW_DELTA: i64 = -20;
pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

/// Minimum score that unlocks the cash payment method.
pub const CASH_ELIGIBILITY_THRESHOLD: u8 = 80;

/// Aggregated booking outcomes for a single guest.
///
/// Counters are independent; `completed_stays + cancellations + no_shows <= total_bookings`
/// is expected of callers but never checked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOutcomeSummary {
    pub total_bookings: u32,
    pub completed_stays: u32,
    pub cancellations: u32,
    pub no_shows: u32,
}

impl BookingOutcomeSummary {
    pub const fn new(
        total_bookings: u32,
        completed_stays: u32,
        cancellations: u32,
        no_shows: u32,
    ) -> Self {
        Self {
            total_bookings,
            completed_stays,
            cancellations,
            no_shows,
        }
    }
}

/// Untrusted counters as they arrive from request bodies or other loosely typed callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutcomeCounts {
    #[serde(default, alias = "totalBookings")]
    pub total_bookings: i64,
    #[serde(default, alias = "completedStays")]
    pub completed_stays: i64,
    #[serde(default)]
    pub cancellations: i64,
    #[serde(default, alias = "noShows")]
    pub no_shows: i64,
}

fn counter(field: &'static str, value: i64) -> Result<u32, CredibilityError> {
    if value < 0 {
        return Err(CredibilityError::InvalidArgument {
            field,
            reason: format!("must be non-negative, got {value}"),
        });
    }
    u32::try_from(value).map_err(|_| CredibilityError::InvalidArgument {
        field,
        reason: format!("must not exceed {}, got {value}", u32::MAX),
    })
}

impl TryFrom<RawOutcomeCounts> for BookingOutcomeSummary {
    type Error = CredibilityError;

    fn try_from(raw: RawOutcomeCounts) -> Result<Self, Self::Error> {
        Ok(Self {
            total_bookings: counter("total_bookings", raw.total_bookings)?,
            completed_stays: counter("completed_stays", raw.completed_stays)?,
            cancellations: counter("cancellations", raw.cancellations)?,
            no_shows: counter("no_shows", raw.no_shows)?,
        })
    }
}

/// Trust score in the closed interval `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CredibilityScore(u8);

impl CredibilityScore {
    pub fn new(value: u8) -> Result<Self, CredibilityError> {
        if value > MAX_SCORE {
            return Err(CredibilityError::InvalidArgument {
                field: "score",
                reason: format!("must be within {MIN_SCORE}..={MAX_SCORE}, got {value}"),
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn is_cash_eligible(self) -> bool {
        is_cash_eligible(self)
    }

    fn clamped(raw: i64) -> Self {
        // Clamped into 0..=100, so the narrowing cast cannot truncate.
        Self(raw.clamp(i64::from(MIN_SCORE), i64::from(MAX_SCORE)) as u8)
    }
}

impl TryFrom<u8> for CredibilityScore {
    type Error = CredibilityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CredibilityScore> for u8 {
    fn from(score: CredibilityScore) -> Self {
        score.0
    }
}

impl fmt::Display for CredibilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum every term first, clamp once at the end.
pub fn compute_credibility_score(summary: &BookingOutcomeSummary) -> CredibilityScore {
    let raw = BASE_SCORE
        + COMPLETED_STAY_DELTA * i64::from(summary.completed_stays)
        + CANCELLATION_DELTA * i64::from(summary.cancellations)
        + NO_SHOW_DELTA * i64::from(summary.no_shows);

    CredibilityScore::clamped(raw)
}

pub fn is_cash_eligible(score: CredibilityScore) -> bool {
    score.0 >= CASH_ELIGIBILITY_THRESHOLD
}
