use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::bookings::{
    BookingId, BookingRecord, BookingStatus, BookingStore, Guest, GuestId, Room, RoomId,
    RoomType, StoreError,
};
use crate::desk::{credibility_router, CredibilityService};

pub(super) const LOYAL: &str = "g-loyal";
pub(super) const NEWCOMER: &str = "g-new";
pub(super) const RISKY: &str = "g-risky";

pub(super) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, day).expect("valid date")
}

fn guest(id: &str, name: &str) -> Guest {
    Guest {
        id: GuestId(id.to_string()),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        phone: None,
    }
}

fn room(id: &str, number: &str, room_type: RoomType, nightly_rate: u64) -> Room {
    Room {
        id: RoomId(id.to_string()),
        number: number.to_string(),
        room_type,
        nightly_rate,
        capacity: 2,
    }
}

pub(super) fn booking(id: &str, guest: &str, status: BookingStatus, day: u32) -> BookingRecord {
    BookingRecord {
        id: BookingId(id.to_string()),
        guest_id: GuestId(guest.to_string()),
        room_id: RoomId("r-101".to_string()),
        check_in: date(day),
        check_out: date(day + 2),
        guests: 2,
        status,
        payment_method: None,
    }
}

/// Loyal guest scores 80, newcomer 50, risky guest 40; each has one open booking.
pub(super) fn seeded_store() -> MemoryStore {
    let store = MemoryStore::default();
    store.add_guest(guest(LOYAL, "Ada Whitfield"));
    store.add_guest(guest(NEWCOMER, "Noor Haddad"));
    store.add_guest(guest(RISKY, "Rafe Calder"));
    store.add_room(room("r-101", "101", RoomType::Standard, 12_900));
    store.add_room(room("r-305", "305", RoomType::Suite, 32_000));

    for (index, status) in [
        BookingStatus::CheckedOut,
        BookingStatus::CheckedOut,
        BookingStatus::CheckedOut,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ]
    .into_iter()
    .enumerate()
    {
        store.add_booking(booking(
            &format!("b-loyal-{index}"),
            LOYAL,
            status,
            1 + index as u32,
        ));
    }
    store.add_booking(booking("b-loyal-open", LOYAL, BookingStatus::Confirmed, 20));

    store.add_booking(booking("b-new-open", NEWCOMER, BookingStatus::Pending, 21));

    for (index, status) in [
        BookingStatus::CheckedOut,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ]
    .into_iter()
    .enumerate()
    {
        store.add_booking(booking(
            &format!("b-risky-{index}"),
            RISKY,
            status,
            1 + index as u32,
        ));
    }
    store.add_booking(booking("b-risky-open", RISKY, BookingStatus::Confirmed, 22));

    store
}

pub(super) fn build_service() -> (CredibilityService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(seeded_store());
    let service = CredibilityService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_seeded_store() -> axum::Router {
    let (service, _) = build_service();
    credibility_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    guests: Arc<Mutex<HashMap<GuestId, Guest>>>,
    rooms: Arc<Mutex<HashMap<RoomId, Room>>>,
    bookings: Arc<Mutex<HashMap<BookingId, BookingRecord>>>,
}

impl MemoryStore {
    pub(super) fn add_guest(&self, guest: Guest) {
        self.guests
            .lock()
            .expect("guest mutex poisoned")
            .insert(guest.id.clone(), guest);
    }

    pub(super) fn add_room(&self, room: Room) {
        self.rooms
            .lock()
            .expect("room mutex poisoned")
            .insert(room.id.clone(), room);
    }

    pub(super) fn add_booking(&self, booking: BookingRecord) {
        self.bookings
            .lock()
            .expect("booking mutex poisoned")
            .insert(booking.id.clone(), booking);
    }
}

impl BookingStore for MemoryStore {
    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError> {
        Ok(self.guests.lock().expect("guest mutex poisoned").get(id).cloned())
    }

    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.lock().expect("room mutex poisoned").get(id).cloned())
    }

    fn booking(&self, id: &BookingId) -> Result<Option<BookingRecord>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .expect("booking mutex poisoned")
            .get(id)
            .cloned())
    }

    fn bookings_for_guest(&self, id: &GuestId) -> Result<Vec<BookingRecord>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .expect("booking mutex poisoned")
            .values()
            .filter(|booking| &booking.guest_id == id)
            .cloned()
            .collect())
    }

    fn update_booking(&self, record: BookingRecord) -> Result<(), StoreError> {
        let mut guard = self.bookings.lock().expect("booking mutex poisoned");
        match guard.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

pub(super) struct UnavailableStore;

impl BookingStore for UnavailableStore {
    fn guest(&self, _id: &GuestId) -> Result<Option<Guest>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn room(&self, _id: &RoomId) -> Result<Option<Room>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn booking(&self, _id: &BookingId) -> Result<Option<BookingRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn bookings_for_guest(&self, _id: &GuestId) -> Result<Vec<BookingRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update_booking(&self, _record: BookingRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
