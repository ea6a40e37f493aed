use super::domain::{BookingId, BookingRecord, Guest, GuestId, Room, RoomId};

/// Storage abstraction over guests, rooms, and bookings so the service can be exercised in isolation.
pub trait BookingStore: Send + Sync {
    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError>;
    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError>;
    fn booking(&self, id: &BookingId) -> Result<Option<BookingRecord>, StoreError>;
    fn bookings_for_guest(&self, id: &GuestId) -> Result<Vec<BookingRecord>, StoreError>;
    fn update_booking(&self, record: BookingRecord) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
