use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::credibility::BookingOutcomeSummary;
use crate::payments::PaymentMethod;

/// Identifier wrapper for registered guests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub String);

macro_rules! display_id {
    ($($id:ident),+) => {
        $(impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })+
    };
}

display_id!(GuestId, RoomId, BookingId);

/// Guest profile as held by the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Family,
}

impl RoomType {
    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }
}

/// Bookable room with its nightly rate in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub room_type: RoomType,
    pub nightly_rate: u64,
    pub capacity: u8,
}

/// Lifecycle of a reservation from request to checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked in",
            BookingStatus::CheckedOut => "checked out",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no show",
        }
    }

    /// Parse a status label; `_` and `-` are accepted in place of spaces.
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "checked in" => Some(BookingStatus::CheckedIn),
            "checked out" => Some(BookingStatus::CheckedOut),
            "cancelled" | "canceled" => Some(BookingStatus::Cancelled),
            "no show" | "noshow" => Some(BookingStatus::NoShow),
            _ => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            BookingStatus::CheckedOut | BookingStatus::Cancelled | BookingStatus::NoShow
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored reservation. Guest and room are referenced by id, never embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl BookingOutcomeSummary {
    /// Count outcomes from a sequence of booking statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = BookingStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut summary, status| {
                summary.total_bookings = summary.total_bookings.saturating_add(1);
                match status {
                    BookingStatus::CheckedOut => {
                        summary.completed_stays = summary.completed_stays.saturating_add(1)
                    }
                    BookingStatus::Cancelled => {
                        summary.cancellations = summary.cancellations.saturating_add(1)
                    }
                    BookingStatus::NoShow => summary.no_shows = summary.no_shows.saturating_add(1),
                    BookingStatus::Pending
                    | BookingStatus::Confirmed
                    | BookingStatus::CheckedIn => {}
                }
                summary
            })
    }

    pub fn from_bookings(bookings: &[BookingRecord]) -> Self {
        Self::from_statuses(bookings.iter().map(|booking| booking.status))
    }
}
