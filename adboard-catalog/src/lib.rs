pub mod listings;

pub use listings::{filter_keyword, BillboardDraft, ListingBook, ListingError};
