//! Front-desk facade: guest assessment, payment options, and the HTTP surface over them.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::{credibility_router, PaymentSelection};
pub use service::{CredibilityService, PaymentOptionsView, ServiceError};
