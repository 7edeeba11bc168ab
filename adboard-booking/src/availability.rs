use adboard_domain::{Billboard, Booking, DateRange};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Non-canceled bookings referencing `billboard_id`.
fn active_for(billboard_id: Uuid, bookings: &[Booking]) -> impl Iterator<Item = &Booking> {
    bookings
        .iter()
        .filter(move |b| b.billboard_id == billboard_id && !b.is_canceled())
}

/// Whether `billboard` can be booked for the inclusive range
/// [start, end].
///
/// An inactive billboard is never available. With either date missing
/// this degenerates to "has the billboard ever been booked": true iff
/// zero non-canceled bookings reference it. That is narrower than
/// availability over an unbounded range and is kept deliberately.
pub fn is_available_for_dates(
    billboard: &Billboard,
    bookings: &[Booking],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    if !billboard.active {
        return false;
    }
    let (Some(start), Some(end)) = (start, end) else {
        return active_for(billboard.id, bookings).next().is_none();
    };
    // Inverted ranges are rejected upstream; unavailable here as well.
    let Ok(requested) = DateRange::new(start, end) else {
        return false;
    };
    active_for(billboard.id, bookings).all(|b| !requested.overlaps(&b.range()))
}

/// Whether some non-canceled booking interval contains `date`.
pub fn is_booked_on(billboard: &Billboard, bookings: &[Booking], date: NaiveDate) -> bool {
    active_for(billboard.id, bookings).any(|b| b.range().contains(date))
}

/// `is_booked_on` at the current UTC date.
pub fn is_booked_now(billboard: &Billboard, bookings: &[Booking]) -> bool {
    is_booked_on(billboard, bookings, Utc::now().date_naive())
}

/// Whether any non-canceled booking references `billboard_id`.
/// Guards billboard removal.
pub fn has_active_bookings(billboard_id: Uuid, bookings: &[Booking]) -> bool {
    active_for(billboard_id, bookings).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adboard_domain::Coordinates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn board(active: bool) -> Billboard {
        Billboard {
            id: Uuid::new_v4(),
            owner_id: "owner-1".to_string(),
            title: "Test Board".to_string(),
            description: String::new(),
            price: 100.0,
            size: "10x30 ft".to_string(),
            location: Coordinates::new(40.7484, -73.9857),
            address: "NYC".to_string(),
            active,
        }
    }

    fn booking_for(billboard: &Billboard, start: NaiveDate, end: NaiveDate) -> Booking {
        Booking::new(
            billboard.id,
            "customer-1".to_string(),
            DateRange::new(start, end).unwrap(),
        )
    }

    #[test]
    fn test_inactive_board_never_available() {
        let billboard = board(false);

        assert!(!is_available_for_dates(&billboard, &[], None, None));
        assert!(!is_available_for_dates(
            &billboard,
            &[],
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 2)),
        ));
    }

    #[test]
    fn test_overlapping_request_rejected_adjacent_accepted() {
        let billboard = board(true);
        let existing = booking_for(&billboard, date(2024, 6, 1), date(2024, 6, 10));
        let bookings = vec![existing];

        assert!(!is_available_for_dates(
            &billboard,
            &bookings,
            Some(date(2024, 6, 5)),
            Some(date(2024, 6, 7)),
        ));
        assert!(is_available_for_dates(
            &billboard,
            &bookings,
            Some(date(2024, 6, 11)),
            Some(date(2024, 6, 15)),
        ));
    }

    #[test]
    fn test_canceled_booking_does_not_block() {
        let billboard = board(true);
        let mut existing = booking_for(&billboard, date(2024, 6, 1), date(2024, 6, 10));
        existing.cancel();
        let bookings = vec![existing];

        assert!(is_available_for_dates(
            &billboard,
            &bookings,
            Some(date(2024, 6, 5)),
            Some(date(2024, 6, 7)),
        ));
    }

    #[test]
    fn test_missing_dates_means_never_booked() {
        let billboard = board(true);
        let existing = booking_for(&billboard, date(2024, 6, 1), date(2024, 6, 10));

        // No bookings at all: available.
        assert!(is_available_for_dates(&billboard, &[], None, None));
        // Any non-canceled booking, even a past one, flips the check.
        assert!(!is_available_for_dates(&billboard, &[existing.clone()], Some(date(2024, 7, 1)), None));
        assert!(!is_available_for_dates(&billboard, &[existing], None, None));
    }

    #[test]
    fn test_inverted_request_is_unavailable() {
        let billboard = board(true);

        assert!(!is_available_for_dates(
            &billboard,
            &[],
            Some(date(2024, 6, 10)),
            Some(date(2024, 6, 1)),
        ));
    }

    #[test]
    fn test_bookings_of_other_boards_ignored() {
        let billboard = board(true);
        let other = board(true);
        let bookings = vec![booking_for(&other, date(2024, 6, 1), date(2024, 6, 10))];

        assert!(is_available_for_dates(
            &billboard,
            &bookings,
            Some(date(2024, 6, 5)),
            Some(date(2024, 6, 7)),
        ));
    }

    #[test]
    fn test_booked_on_is_inclusive_at_both_ends() {
        let billboard = board(true);
        let bookings = vec![booking_for(&billboard, date(2024, 6, 1), date(2024, 6, 10))];

        assert!(is_booked_on(&billboard, &bookings, date(2024, 6, 1)));
        assert!(is_booked_on(&billboard, &bookings, date(2024, 6, 10)));
        assert!(!is_booked_on(&billboard, &bookings, date(2024, 6, 11)));
        assert!(!is_booked_on(&billboard, &bookings, date(2024, 5, 31)));
    }

    #[test]
    fn test_has_active_bookings_ignores_canceled() {
        let billboard = board(true);
        let mut existing = booking_for(&billboard, date(2024, 6, 1), date(2024, 6, 10));

        assert!(has_active_bookings(billboard.id, &[existing.clone()]));
        existing.cancel();
        assert!(!has_active_bookings(billboard.id, &[existing]));
    }
}
