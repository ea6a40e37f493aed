//! Hotel front-desk trust layer: guest credibility scoring, cash-payment eligibility,
//! and the booking data those decisions are computed from.

pub mod bookings;
pub mod config;
pub mod credibility;
pub mod desk;
pub mod error;
pub mod payments;
pub mod session;
pub mod telemetry;
