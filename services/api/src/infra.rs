use chrono::NaiveDate;
use frontdesk::bookings::{
    BookingId, BookingRecord, BookingStatus, BookingStore, Guest, GuestId, Room, RoomId,
    RoomType, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Guests, rooms, and bookings held in process memory; ordered maps keep listings stable.
#[derive(Default, Clone)]
pub(crate) struct InMemoryBookingStore {
    guests: Arc<Mutex<BTreeMap<GuestId, Guest>>>,
    rooms: Arc<Mutex<BTreeMap<RoomId, Room>>>,
    bookings: Arc<Mutex<BTreeMap<BookingId, BookingRecord>>>,
}

impl InMemoryBookingStore {
    pub(crate) fn insert_guest(&self, guest: Guest) -> Result<(), StoreError> {
        let mut guard = self.guests.lock().map_err(poisoned)?;
        guard.insert(guest.id.clone(), guest);
        Ok(())
    }

    pub(crate) fn insert_room(&self, room: Room) -> Result<(), StoreError> {
        let mut guard = self.rooms.lock().map_err(poisoned)?;
        guard.insert(room.id.clone(), room);
        Ok(())
    }

    pub(crate) fn insert_booking(&self, booking: BookingRecord) -> Result<(), StoreError> {
        let mut guard = self.bookings.lock().map_err(poisoned)?;
        guard.insert(booking.id.clone(), booking);
        Ok(())
    }

    pub(crate) fn guests(&self) -> Result<Vec<Guest>, StoreError> {
        let guard = self.guests.lock().map_err(poisoned)?;
        Ok(guard.values().cloned().collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

impl BookingStore for InMemoryBookingStore {
    fn guest(&self, id: &GuestId) -> Result<Option<Guest>, StoreError> {
        let guard = self.guests.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn room(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        let guard = self.rooms.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn booking(&self, id: &BookingId) -> Result<Option<BookingRecord>, StoreError> {
        let guard = self.bookings.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn bookings_for_guest(&self, id: &GuestId) -> Result<Vec<BookingRecord>, StoreError> {
        let guard = self.bookings.lock().map_err(poisoned)?;
        Ok(guard
            .values()
            .filter(|booking| &booking.guest_id == id)
            .cloned()
            .collect())
    }

    fn update_booking(&self, record: BookingRecord) -> Result<(), StoreError> {
        let mut guard = self.bookings.lock().map_err(poisoned)?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

const SEED_YEAR: i32 = 2025;

fn seed_date(month: u32, day: u32) -> Result<NaiveDate, StoreError> {
    NaiveDate::from_ymd_opt(SEED_YEAR, month, day).ok_or_else(|| {
        StoreError::Unavailable(format!("invalid seed date {SEED_YEAR}-{month:02}-{day:02}"))
    })
}

/// (booking, guest, room, (month, day) of check-in, nights, status)
type SeedBooking = (&'static str, &'static str, &'static str, (u32, u32), i64, BookingStatus);

const SEED_GUESTS: [(&str, &str, &str); 4] = [
    ("g-001", "John Smith", "john.smith@example.com"),
    ("g-002", "Maria Garcia", "maria.garcia@example.com"),
    ("g-003", "Kenji Watanabe", "kenji.watanabe@example.com"),
    ("g-004", "Priya Raman", "priya.raman@example.com"),
];

const SEED_ROOMS: [(&str, &str, RoomType, u64, u8); 4] = [
    ("r-101", "101", RoomType::Standard, 12_900, 2),
    ("r-204", "204", RoomType::Deluxe, 18_500, 3),
    ("r-310", "310", RoomType::Family, 22_000, 5),
    ("r-501", "501", RoomType::Suite, 34_000, 4),
];

const SEED_BOOKINGS: [SeedBooking; 14] = [
    ("bk-1001", "g-001", "r-204", (1, 10), 3, BookingStatus::CheckedOut),
    ("bk-1002", "g-001", "r-204", (3, 2), 2, BookingStatus::CheckedOut),
    ("bk-1003", "g-001", "r-501", (5, 18), 4, BookingStatus::CheckedOut),
    ("bk-1004", "g-001", "r-101", (7, 7), 1, BookingStatus::CheckedOut),
    ("bk-1005", "g-001", "r-204", (8, 14), 2, BookingStatus::Cancelled),
    ("bk-1006", "g-001", "r-501", (11, 20), 3, BookingStatus::Confirmed),
    ("bk-2001", "g-002", "r-310", (2, 1), 5, BookingStatus::CheckedOut),
    ("bk-2002", "g-002", "r-310", (6, 12), 2, BookingStatus::CheckedOut),
    ("bk-2003", "g-002", "r-101", (9, 3), 1, BookingStatus::Cancelled),
    ("bk-2004", "g-002", "r-204", (10, 9), 2, BookingStatus::NoShow),
    ("bk-2005", "g-002", "r-310", (12, 1), 4, BookingStatus::Pending),
    ("bk-3001", "g-003", "r-101", (11, 28), 2, BookingStatus::Confirmed),
    ("bk-4001", "g-004", "r-204", (4, 4), 2, BookingStatus::NoShow),
    ("bk-4002", "g-004", "r-101", (12, 5), 3, BookingStatus::Pending),
];

/// Front desk populated with a small, fixed set of guests and booking histories.
pub(crate) fn seeded_store() -> Result<InMemoryBookingStore, StoreError> {
    let store = InMemoryBookingStore::default();

    for (id, name, email) in SEED_GUESTS {
        store.insert_guest(Guest {
            id: GuestId(id.to_string()),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
        })?;
    }

    for (id, number, room_type, nightly_rate, capacity) in SEED_ROOMS {
        store.insert_room(Room {
            id: RoomId(id.to_string()),
            number: number.to_string(),
            room_type,
            nightly_rate,
            capacity,
        })?;
    }

    for (id, guest, room, (month, check_in_day), nights, status) in SEED_BOOKINGS {
        let check_in = seed_date(month, check_in_day)?;
        store.insert_booking(BookingRecord {
            id: BookingId(id.to_string()),
            guest_id: GuestId(guest.to_string()),
            room_id: RoomId(room.to_string()),
            check_in,
            check_out: check_in + chrono::Duration::days(nights),
            guests: 2,
            status,
            payment_method: None,
        })?;
    }

    Ok(store)
}
