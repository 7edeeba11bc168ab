pub mod availability;
pub mod ledger;

pub use availability::{has_active_bookings, is_available_for_dates, is_booked_now, is_booked_on};
pub use ledger::{BookingError, BookingLedger, BookingRequest};
