use adboard_booking::{is_available_for_dates, BookingError, BookingLedger, BookingRequest};
use adboard_catalog::{filter_keyword, BillboardDraft, ListingBook, ListingError};
use adboard_domain::{Billboard, Booking, Coordinates, Role, User};
use adboard_geo::{within_radius, NominatimClient};
use adboard_store::{blob, keys, BlobStore, Config, FileStore, StoreError};
use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::session::{self, SessionError};
use crate::stats::{self, CustomerSummary, Overview, OwnerInventory};
use crate::seed;

/// Search criteria as gathered from the find-billboards panel.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Radius filter applies only when an origin is selected.
    pub origin: Option<Coordinates>,
    pub radius_km: f64,
    pub keyword: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            origin: None,
            radius_km: 25.0,
            keyword: None,
            start_date: None,
            end_date: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Billboard not found: {0}")]
    BillboardNotFound(Uuid),

    #[error("Only customers can book billboards")]
    NotACustomer,
}

/// Marketplace facade over an injected blob store. Every mutation
/// reads the full collection, applies the change and rewrites the
/// stored value: last writer wins, no locking.
pub struct Marketplace<S: BlobStore> {
    store: S,
}

impl Marketplace<FileStore> {
    /// File-backed marketplace at the configured data directory.
    pub fn open(config: &Config) -> Result<Self, MarketError> {
        Ok(Self::new(FileStore::new(config.store.data_dir.clone())?))
    }
}

impl<S: BlobStore> Marketplace<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn listings(&self) -> ListingBook {
        ListingBook::from_records(blob::load_or_default(&self.store, keys::BILLBOARDS_KEY))
    }

    fn ledger(&self) -> BookingLedger {
        BookingLedger::from_records(blob::load_or_default(&self.store, keys::BOOKINGS_KEY))
    }

    fn persist_listings(&mut self, book: &ListingBook) -> Result<(), StoreError> {
        blob::save(&mut self.store, keys::BILLBOARDS_KEY, book.records())
    }

    fn persist_bookings(&mut self, ledger: &BookingLedger) -> Result<(), StoreError> {
        blob::save(&mut self.store, keys::BOOKINGS_KEY, ledger.records())
    }

    // Sessions

    pub fn sign_in(&mut self, name: &str, email: &str, role: Role) -> Result<User, MarketError> {
        Ok(session::sign_in(&mut self.store, name, email, role)?)
    }

    pub fn current_user(&self) -> Option<User> {
        session::current_user(&self.store)
    }

    pub fn sign_out(&mut self) -> Result<(), MarketError> {
        Ok(session::sign_out(&mut self.store)?)
    }

    // Listings

    pub fn add_billboard(
        &mut self,
        owner: &User,
        draft: BillboardDraft,
    ) -> Result<Billboard, MarketError> {
        let mut book = self.listings();
        let billboard = book.create(owner, draft)?;
        self.persist_listings(&book)?;
        Ok(billboard)
    }

    pub fn toggle_billboard_active(&mut self, owner: &User, id: Uuid) -> Result<bool, MarketError> {
        let mut book = self.listings();
        let active = book.toggle_active(id, &owner.id.to_string())?;
        self.persist_listings(&book)?;
        Ok(active)
    }

    pub fn remove_billboard(&mut self, owner: &User, id: Uuid) -> Result<Billboard, MarketError> {
        let mut book = self.listings();
        let bookings: Vec<Booking> = blob::load_or_default(&self.store, keys::BOOKINGS_KEY);
        let removed = book.remove(id, &owner.id.to_string(), &bookings)?;
        self.persist_listings(&book)?;
        Ok(removed)
    }

    pub fn billboards(&self) -> Vec<Billboard> {
        self.listings().into_records()
    }

    pub fn my_billboards(&self, owner: &User) -> Vec<Billboard> {
        self.listings().by_owner(&owner.id.to_string())
    }

    // Bookings

    pub fn book(
        &mut self,
        customer: &User,
        billboard_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Booking, MarketError> {
        if !customer.is_customer() {
            return Err(MarketError::NotACustomer);
        }
        let book = self.listings();
        let billboard = book
            .get(billboard_id)
            .ok_or(MarketError::BillboardNotFound(billboard_id))?;

        let mut ledger = self.ledger();
        let booking = ledger.book(
            billboard,
            &customer.id.to_string(),
            BookingRequest {
                start_date: start,
                end_date: end,
            },
        )?;
        self.persist_bookings(&ledger)?;
        Ok(booking)
    }

    pub fn cancel_booking(&mut self, customer: &User, booking_id: Uuid) -> Result<(), MarketError> {
        let mut ledger = self.ledger();
        ledger.cancel(booking_id, &customer.id.to_string())?;
        self.persist_bookings(&ledger)?;
        Ok(())
    }

    pub fn my_bookings(&self, customer: &User) -> Vec<Booking> {
        self.ledger().for_user(&customer.id.to_string())
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.ledger().into_records()
    }

    // Search

    /// Active listings, narrowed by radius, keyword and availability,
    /// in stored order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Billboard> {
        let book = self.listings();
        let ledger = self.ledger();

        let mut results = book.active();
        if let Some(origin) = query.origin {
            results = within_radius(origin, query.radius_km, &results);
        }
        if let Some(keyword) = query.keyword.as_deref() {
            if !keyword.trim().is_empty() {
                results = filter_keyword(&results, keyword);
            }
        }
        results.retain(|b| {
            is_available_for_dates(b, ledger.records(), query.start_date, query.end_date)
        });
        results
    }

    // Stats

    pub fn overview(&self) -> Overview {
        stats::overview_at(
            self.listings().records(),
            self.ledger().records(),
            Utc::now().date_naive(),
        )
    }

    pub fn owner_inventory(&self, owner: &User) -> OwnerInventory {
        stats::owner_inventory_at(
            &owner.id.to_string(),
            self.listings().records(),
            self.ledger().records(),
            Utc::now().date_naive(),
        )
    }

    pub fn customer_summary(&self, customer: &User) -> CustomerSummary {
        stats::customer_summary_at(
            &customer.id.to_string(),
            self.ledger().records(),
            Utc::now().date_naive(),
        )
    }

    // Seeding

    /// Apply startup seeding according to config.
    pub fn bootstrap(&mut self, config: &Config) -> Result<bool, MarketError> {
        if !config.seed.demo_data {
            return Ok(false);
        }
        self.seed_demo_data()
    }

    /// Insert the demo listings, but only when the stored billboard
    /// list is missing or empty. Returns whether seeding happened.
    pub fn seed_demo_data(&mut self) -> Result<bool, MarketError> {
        let existing: Vec<Billboard> = blob::load_or_default(&self.store, keys::BILLBOARDS_KEY);
        if !existing.is_empty() {
            return Ok(false);
        }

        let samples = seed::demo_billboards();
        blob::save(&mut self.store, keys::BILLBOARDS_KEY, &samples)?;
        blob::save(&mut self.store, keys::BOOKINGS_KEY, &Vec::<Booking>::new())?;
        info!("Seeded {} demo billboards", samples.len());
        Ok(true)
    }
}

/// Geocoding client configured from the app config.
pub fn geocoder(config: &Config) -> NominatimClient {
    NominatimClient::new(config.geocoding.base_url.clone())
        .with_limits(config.geocoding.min_query_len, config.geocoding.result_limit)
}
