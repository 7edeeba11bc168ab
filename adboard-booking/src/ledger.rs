use adboard_domain::{Billboard, Booking, DateRange};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::availability::is_available_for_dates;

/// A booking request as gathered from the UI; dates may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BookingRequest {
    pub fn for_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Select start and end dates")]
    MissingDates,

    #[error("End date {end} must not be earlier than start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("Billboard not available for selected dates: {billboard_id}")]
    Unavailable { billboard_id: Uuid },

    #[error("Booking not found: {0}")]
    NotFound(Uuid),

    #[error("Booking belongs to another user: {0}")]
    NotBookingOwner(Uuid),

    #[error("Booking already canceled: {0}")]
    AlreadyCanceled(Uuid),
}

/// Owns the full booking collection. Bookings are never physically
/// deleted; confirmed -> canceled is the only transition.
#[derive(Debug, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn records(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn into_records(self) -> Vec<Booking> {
        self.bookings
    }

    /// Confirm a booking for `billboard`. Validation failures abort
    /// without touching the collection; the new booking is prepended.
    pub fn book(
        &mut self,
        billboard: &Billboard,
        user_id: &str,
        request: BookingRequest,
    ) -> Result<Booking, BookingError> {
        let (start, end) = match (request.start_date, request.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(BookingError::MissingDates),
        };
        let range =
            DateRange::new(start, end).map_err(|_| BookingError::EndBeforeStart { start, end })?;
        if !is_available_for_dates(billboard, &self.bookings, Some(start), Some(end)) {
            return Err(BookingError::Unavailable {
                billboard_id: billboard.id,
            });
        }

        let booking = Booking::new(billboard.id, user_id.to_string(), range);
        info!("Booking confirmed: {} for billboard {}", booking.id, billboard.id);
        self.bookings.insert(0, booking.clone());
        Ok(booking)
    }

    /// Cancel a confirmed booking. Only the booking's own user may
    /// cancel; a canceled booking is terminal.
    pub fn cancel(&mut self, booking_id: Uuid, user_id: &str) -> Result<(), BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or(BookingError::NotFound(booking_id))?;

        if booking.user_id != user_id {
            return Err(BookingError::NotBookingOwner(booking_id));
        }
        if booking.is_canceled() {
            return Err(BookingError::AlreadyCanceled(booking_id));
        }

        booking.cancel();
        info!("Booking canceled: {}", booking_id);
        Ok(())
    }

    /// A user's bookings, newest first.
    pub fn for_user(&self, user_id: &str) -> Vec<Booking> {
        let mut mine: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine
    }

    pub fn for_billboard(&self, billboard_id: Uuid) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.billboard_id == billboard_id)
            .cloned()
            .collect()
    }
}
