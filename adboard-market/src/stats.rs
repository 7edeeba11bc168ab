use adboard_booking::is_booked_on;
use adboard_domain::{Billboard, Booking};
use chrono::NaiveDate;

/// Marketplace-wide counters for the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    pub total_billboards: usize,
    pub active_billboards: usize,
    pub booked_now: usize,
}

/// An owner's slice of the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerInventory {
    pub boards: usize,
    pub booked_now: usize,
}

/// A customer's non-canceled bookings, split around `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerSummary {
    pub upcoming: usize,
    pub past: usize,
}

pub fn overview_at(billboards: &[Billboard], bookings: &[Booking], today: NaiveDate) -> Overview {
    Overview {
        total_billboards: billboards.len(),
        active_billboards: billboards.iter().filter(|b| b.active).count(),
        booked_now: billboards
            .iter()
            .filter(|b| is_booked_on(b, bookings, today))
            .count(),
    }
}

pub fn owner_inventory_at(
    owner_id: &str,
    billboards: &[Billboard],
    bookings: &[Booking],
    today: NaiveDate,
) -> OwnerInventory {
    let mine: Vec<&Billboard> = billboards.iter().filter(|b| b.owner_id == owner_id).collect();
    OwnerInventory {
        boards: mine.len(),
        booked_now: mine
            .iter()
            .filter(|b| is_booked_on(b, bookings, today))
            .count(),
    }
}

pub fn customer_summary_at(user_id: &str, bookings: &[Booking], today: NaiveDate) -> CustomerSummary {
    let mine = bookings
        .iter()
        .filter(|b| b.user_id == user_id && !b.is_canceled());
    let (mut upcoming, mut past) = (0, 0);
    for booking in mine {
        if booking.end_date >= today {
            upcoming += 1;
        } else {
            past += 1;
        }
    }
    CustomerSummary { upcoming, past }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adboard_domain::{Coordinates, DateRange};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn board(owner_id: &str, active: bool) -> Billboard {
        Billboard {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            title: "Board".to_string(),
            description: String::new(),
            price: 100.0,
            size: "N/A".to_string(),
            location: Coordinates::new(0.0, 0.0),
            address: String::new(),
            active,
        }
    }

    fn booking(billboard: &Billboard, user_id: &str, start: NaiveDate, end: NaiveDate) -> Booking {
        Booking::new(
            billboard.id,
            user_id.to_string(),
            DateRange::new(start, end).unwrap(),
        )
    }

    #[test]
    fn test_overview_counts() {
        let a = board("owner-1", true);
        let b = board("owner-1", false);
        let c = board("owner-2", true);
        let today = date(2024, 6, 5);
        let bookings = vec![booking(&a, "customer-1", date(2024, 6, 1), date(2024, 6, 10))];

        let overview = overview_at(&[a, b, c], &bookings, today);
        assert_eq!(overview.total_billboards, 3);
        assert_eq!(overview.active_billboards, 2);
        assert_eq!(overview.booked_now, 1);
    }

    #[test]
    fn test_owner_inventory_scoped_to_owner() {
        let a = board("owner-1", true);
        let c = board("owner-2", true);
        let today = date(2024, 6, 5);
        let bookings = vec![booking(&c, "customer-1", date(2024, 6, 1), date(2024, 6, 10))];

        let inventory = owner_inventory_at("owner-1", &[a, c], &bookings, today);
        assert_eq!(inventory.boards, 1);
        assert_eq!(inventory.booked_now, 0);
    }

    #[test]
    fn test_customer_summary_splits_and_skips_canceled() {
        let a = board("owner-1", true);
        let today = date(2024, 7, 1);

        let upcoming = booking(&a, "customer-1", date(2024, 7, 10), date(2024, 7, 12));
        let ends_today = booking(&a, "customer-1", date(2024, 6, 25), date(2024, 7, 1));
        let past = booking(&a, "customer-1", date(2024, 6, 1), date(2024, 6, 10));
        let mut canceled = booking(&a, "customer-1", date(2024, 5, 1), date(2024, 5, 10));
        canceled.cancel();
        let other_user = booking(&a, "customer-2", date(2024, 7, 10), date(2024, 7, 12));

        let summary = customer_summary_at(
            "customer-1",
            &[upcoming, ends_today, past, canceled, other_user],
            today,
        );
        // A booking ending today still counts as upcoming (inclusive end).
        assert_eq!(summary.upcoming, 2);
        assert_eq!(summary.past, 1);
    }
}
