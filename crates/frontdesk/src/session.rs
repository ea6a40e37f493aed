//! Explicit session objects that supply the current guest's booking history.

use crate::bookings::{BookingStore, GuestId, StoreError};
use crate::credibility::{assess, BookingOutcomeSummary, CredibilityAssessment};

/// Supplies the guest whose history feeds the credibility engine.
pub trait CurrentUserProvider {
    fn current_guest(&self) -> &GuestId;
    fn booking_history(&self) -> Result<BookingOutcomeSummary, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no guest registered as {0}")]
    UnknownGuest(GuestId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Session bound to a store; history is re-read on every call.
pub struct GuestSession<'a, S: ?Sized> {
    guest_id: GuestId,
    store: &'a S,
}

impl<'a, S> GuestSession<'a, S>
where
    S: BookingStore + ?Sized,
{
    /// Open a session for a guest the store knows about.
    pub fn open(store: &'a S, guest_id: GuestId) -> Result<Self, SessionError> {
        if store.guest(&guest_id)?.is_none() {
            return Err(SessionError::UnknownGuest(guest_id));
        }
        Ok(Self { guest_id, store })
    }
}

impl<S> CurrentUserProvider for GuestSession<'_, S>
where
    S: BookingStore + ?Sized,
{
    fn current_guest(&self) -> &GuestId {
        &self.guest_id
    }

    fn booking_history(&self) -> Result<BookingOutcomeSummary, SessionError> {
        let bookings = self.store.bookings_for_guest(&self.guest_id)?;
        Ok(BookingOutcomeSummary::from_bookings(&bookings))
    }
}

/// Provider over aggregates the caller already holds.
#[derive(Debug, Clone)]
pub struct FixedHistory {
    pub guest_id: GuestId,
    pub summary: BookingOutcomeSummary,
}

impl CurrentUserProvider for FixedHistory {
    fn current_guest(&self) -> &GuestId {
        &self.guest_id
    }

    fn booking_history(&self) -> Result<BookingOutcomeSummary, SessionError> {
        Ok(self.summary)
    }
}

pub fn assess_current_user<P>(provider: &P) -> Result<CredibilityAssessment, SessionError>
where
    P: CurrentUserProvider + ?Sized,
{
    let summary = provider.booking_history()?;
    Ok(assess(&summary))
}
