use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::bookings::{
    BookingId, BookingRecord, BookingResolver, BookingStatus, BookingStore, BookingView, GuestId,
    ResolveError, StoreError,
};
use crate::credibility::{assess_raw, CredibilityAssessment, CredibilityError, RawOutcomeCounts};
use crate::payments::{
    payment_options, select_payment_method, PaymentError, PaymentMethod, PaymentOption,
};
use crate::session::{assess_current_user, GuestSession, SessionError};

/// Payment selector contents for one booking, derived from the guest's current history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOptionsView {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub credibility: CredibilityAssessment,
    pub options: Vec<PaymentOption>,
}

/// Service composing the booking store with the credibility engine.
pub struct CredibilityService<S> {
    store: Arc<S>,
}

impl<S> CredibilityService<S>
where
    S: BookingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Score a registered guest from the bookings currently on file.
    pub fn assess_guest(
        &self,
        guest_id: &GuestId,
    ) -> Result<CredibilityAssessment, ServiceError> {
        let session = GuestSession::open(self.store.as_ref(), guest_id.clone())?;
        let assessment = assess_current_user(&session)?;

        debug!(
            guest = %guest_id,
            score = %assessment.score,
            cash_eligible = assessment.cash_eligible,
            "guest credibility assessed"
        );
        Ok(assessment)
    }

    /// Score aggregates supplied directly by the caller.
    pub fn assess_summary(
        &self,
        raw: RawOutcomeCounts,
    ) -> Result<CredibilityAssessment, ServiceError> {
        Ok(assess_raw(raw)?)
    }

    pub fn booking_view(&self, booking_id: &BookingId) -> Result<BookingView, ServiceError> {
        let record = self.fetch_booking(booking_id)?;
        let view = BookingResolver::new(self.store.as_ref()).resolve(record)?;
        Ok(view)
    }

    pub fn payment_options(
        &self,
        booking_id: &BookingId,
    ) -> Result<PaymentOptionsView, ServiceError> {
        let record = self.fetch_booking(booking_id)?;
        let credibility = self.assess_guest(&record.guest_id)?;

        Ok(PaymentOptionsView {
            options: payment_options(&credibility),
            booking_id: record.id,
            guest_id: record.guest_id,
            credibility,
        })
    }

    /// Record the payment method for an open booking, refusing cash below the threshold.
    pub fn select_payment(
        &self,
        booking_id: &BookingId,
        method: PaymentMethod,
    ) -> Result<BookingView, ServiceError> {
        let mut record = self.fetch_booking(booking_id)?;
        if record.status.is_terminal() {
            return Err(ServiceError::BookingClosed {
                booking_id: record.id,
                status: record.status,
            });
        }

        let credibility = self.assess_guest(&record.guest_id)?;
        let method = match select_payment_method(method, &credibility) {
            Ok(method) => method,
            Err(err) => {
                info!(
                    booking = %record.id,
                    guest = %record.guest_id,
                    score = %credibility.score,
                    "cash payment refused"
                );
                return Err(err.into());
            }
        };

        record.payment_method = Some(method);
        self.store.update_booking(record.clone())?;
        info!(booking = %record.id, method = method.label(), "payment method recorded");

        let view = BookingResolver::new(self.store.as_ref()).resolve(record)?;
        Ok(view)
    }

    fn fetch_booking(&self, booking_id: &BookingId) -> Result<BookingRecord, ServiceError> {
        let record = self
            .store
            .booking(booking_id)?
            .ok_or(StoreError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the credibility service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Credibility(#[from] CredibilityError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("booking {booking_id} is already {status}")]
    BookingClosed {
        booking_id: BookingId,
        status: BookingStatus,
    },
}
