//! Typed booking records, the store seam, and on-demand joins.

pub mod domain;
pub mod resolver;
pub mod stay;
pub mod store;

pub use domain::{
    BookingId, BookingRecord, BookingStatus, Guest, GuestId, Room, RoomId, RoomType,
};
pub use resolver::{BookingResolver, BookingView, ResolveError};
pub use stay::{stay_length, StayError, StayQuote};
pub use store::{BookingStore, StoreError};
