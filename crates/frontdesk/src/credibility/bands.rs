use serde::{Deserialize, Serialize};

use super::score::CredibilityScore;

/// Display band for a credibility score. Nothing gates on bands; cash eligibility uses the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: CredibilityScore) -> Self {
        match score.value() {
            90..=u8::MAX => ScoreBand::Excellent,
            75..=89 => ScoreBand::Good,
            60..=74 => ScoreBand::Fair,
            40..=59 => ScoreBand::NeedsImprovement,
            _ => ScoreBand::Poor,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    /// Likelihood that a guest in this band turns up for a confirmed booking.
    pub const fn turn_up_likelihood(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Very High",
            ScoreBand::Good => "High",
            ScoreBand::Fair => "Moderate",
            ScoreBand::NeedsImprovement => "Low",
            ScoreBand::Poor => "Very Low",
        }
    }
}
