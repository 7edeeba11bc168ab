pub mod billboard;
pub mod booking;
pub mod user;

pub use billboard::{Billboard, Coordinates};
pub use booking::{Booking, BookingStatus, DateRange, DateRangeError};
pub use user::{Role, User};
