use serde::Serialize;

use super::domain::{BookingRecord, Guest, GuestId, Room, RoomId};
use super::stay::{StayError, StayQuote};
use super::store::{BookingStore, StoreError};

/// Booking joined with its guest, room, and stay quote. Built on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub booking: BookingRecord,
    pub status_label: &'static str,
    pub guest: Guest,
    pub room: Room,
    pub stay: StayQuote,
}

/// Materializes [`BookingView`]s by looking up the records a booking references.
pub struct BookingResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> BookingResolver<'a, S>
where
    S: BookingStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn resolve(&self, booking: BookingRecord) -> Result<BookingView, ResolveError> {
        let guest = self
            .store
            .guest(&booking.guest_id)?
            .ok_or_else(|| ResolveError::MissingGuest(booking.guest_id.clone()))?;
        let room = self
            .store
            .room(&booking.room_id)?
            .ok_or_else(|| ResolveError::MissingRoom(booking.room_id.clone()))?;
        let stay = StayQuote::for_dates(booking.check_in, booking.check_out, room.nightly_rate)?;

        Ok(BookingView {
            status_label: booking.status.label(),
            booking,
            guest,
            room,
            stay,
        })
    }

    pub fn resolve_all(
        &self,
        bookings: Vec<BookingRecord>,
    ) -> Result<Vec<BookingView>, ResolveError> {
        bookings
            .into_iter()
            .map(|booking| self.resolve(booking))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("booking references unknown guest {0}")]
    MissingGuest(GuestId),
    #[error("booking references unknown room {0}")]
    MissingRoom(RoomId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Stay(#[from] StayError),
}
