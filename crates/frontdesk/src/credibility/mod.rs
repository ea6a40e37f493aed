//! Guest credibility scoring and the cash-payment gate derived from it.
//!
//! Scores are never stored. Every consumer (profile, booking form, payment selection)
//! recomputes them from the booking history it currently holds.

mod bands;
mod score;

pub use bands::ScoreBand;
pub use score::{
    compute_credibility_score, is_cash_eligible, BookingOutcomeSummary, CredibilityScore,
    RawOutcomeCounts, BASE_SCORE, CANCELLATION_DELTA, CASH_ELIGIBILITY_THRESHOLD,
    COMPLETED_STAY_DELTA, MAX_SCORE, MIN_SCORE, NO_SHOW_DELTA,
};

use serde::Serialize;

/// Errors raised while validating engine inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredibilityError {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

/// The `(score, eligible)` pair consumers render, plus the display band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredibilityAssessment {
    pub score: CredibilityScore,
    pub cash_eligible: bool,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub turn_up_likelihood: &'static str,
}

impl CredibilityAssessment {
    pub fn from_score(score: CredibilityScore) -> Self {
        let band = ScoreBand::for_score(score);
        Self {
            score,
            cash_eligible: is_cash_eligible(score),
            band,
            band_label: band.label(),
            turn_up_likelihood: band.turn_up_likelihood(),
        }
    }
}

/// Score a summary and derive eligibility and band in one pass.
pub fn assess(summary: &BookingOutcomeSummary) -> CredibilityAssessment {
    CredibilityAssessment::from_score(compute_credibility_score(summary))
}

/// Validate untrusted counters, then assess them.
pub fn assess_raw(raw: RawOutcomeCounts) -> Result<CredibilityAssessment, CredibilityError> {
    let summary = BookingOutcomeSummary::try_from(raw)?;
    Ok(assess(&summary))
}
