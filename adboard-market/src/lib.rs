pub mod marketplace;
pub mod seed;
pub mod session;
pub mod stats;

pub use marketplace::{geocoder, MarketError, Marketplace, SearchQuery};
pub use session::SessionError;
pub use stats::{CustomerSummary, Overview, OwnerInventory};
