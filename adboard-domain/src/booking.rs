use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status. One-way: confirmed bookings can be canceled,
/// canceled bookings are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Canceled,
}

#[derive(Debug, thiserror::Error)]
pub enum DateRangeError {
    #[error("End date {end} is earlier than start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// Inclusive calendar date range. `end >= start` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive overlap: the ranges share at least one calendar day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A reservation of a billboard for an inclusive date range.
/// Bookings are never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub billboard_id: Uuid,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(billboard_id: Uuid, user_id: String, range: DateRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            billboard_id,
            user_id,
            start_date: range.start(),
            end_date: range.end(),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    /// The booked interval. Stored dates satisfy `end >= start` by
    /// construction.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.status == BookingStatus::Canceled
    }

    /// Confirmed -> canceled. Transition guards live in the ledger.
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Canceled;
    }
}
