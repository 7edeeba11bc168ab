//! Storage keys, unchanged from the original local-storage layout.

pub const USER_KEY: &str = "bb_user";
pub const BILLBOARDS_KEY: &str = "bb_billboards";
pub const BOOKINGS_KEY: &str = "bb_bookings";
