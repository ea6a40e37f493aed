//! Payment-method options gated by guest credibility.

use serde::{Deserialize, Serialize};

use crate::credibility::{CredibilityAssessment, CredibilityScore, CASH_ELIGIBILITY_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "credit_card" | "card" => Some(PaymentMethod::CreditCard),
            "debit_card" => Some(PaymentMethod::DebitCard),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub const fn requires_credibility(self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

/// One entry in a payment-method selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn cash_ineligible_reason(score: CredibilityScore) -> String {
    format!(
        "Cash payment requires a credibility score of at least {}% (current score: {}%)",
        CASH_ELIGIBILITY_THRESHOLD, score
    )
}

/// List every payment method; cash is disabled with an explanation when the guest is not eligible.
pub fn payment_options(assessment: &CredibilityAssessment) -> Vec<PaymentOption> {
    PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            if method.requires_credibility() && !assessment.cash_eligible {
                PaymentOption {
                    method,
                    enabled: false,
                    reason: Some(cash_ineligible_reason(assessment.score)),
                }
            } else {
                PaymentOption {
                    method,
                    enabled: true,
                    reason: None,
                }
            }
        })
        .collect()
}

pub fn select_payment_method(
    method: PaymentMethod,
    assessment: &CredibilityAssessment,
) -> Result<PaymentMethod, PaymentError> {
    if method.requires_credibility() && !assessment.cash_eligible {
        return Err(PaymentError::CashNotEligible {
            score: assessment.score,
        });
    }
    Ok(method)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error(
        "cash payment requires a credibility score of at least {}% (current score: {}%)",
        CASH_ELIGIBILITY_THRESHOLD,
        .score
    )]
    CashNotEligible { score: CredibilityScore },
}
