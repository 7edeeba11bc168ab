use adboard_booking::has_active_bookings;
use adboard_domain::{Billboard, Booking, Coordinates, User};
use tracing::info;
use uuid::Uuid;

/// Fallback title for a blank listing form.
const DEFAULT_TITLE: &str = "Billboard";
/// Fallback size text for a blank listing form.
const DEFAULT_SIZE: &str = "N/A";

/// Draft listing as entered by an owner. The location comes from the
/// map search selection.
#[derive(Debug, Clone)]
pub struct BillboardDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub size: String,
    pub location: Coordinates,
    pub address: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Only owners can manage billboards")]
    NotAnOwner,

    #[error("Price per day must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("Coordinate out of range: ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Billboard not found: {0}")]
    NotFound(Uuid),

    #[error("Billboard belongs to another owner: {0}")]
    NotListingOwner(Uuid),

    #[error("Cannot remove: billboard has bookings: {0}")]
    HasBookings(Uuid),
}

/// Owns the billboard collection.
#[derive(Debug, Default)]
pub struct ListingBook {
    billboards: Vec<Billboard>,
}

impl ListingBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(billboards: Vec<Billboard>) -> Self {
        Self { billboards }
    }

    pub fn records(&self) -> &[Billboard] {
        &self.billboards
    }

    pub fn into_records(self) -> Vec<Billboard> {
        self.billboards
    }

    /// Create a listing for `owner`. Blank title and size fall back
    /// to defaults; the new listing is active and prepended.
    pub fn create(&mut self, owner: &User, draft: BillboardDraft) -> Result<Billboard, ListingError> {
        if !owner.is_owner() {
            return Err(ListingError::NotAnOwner);
        }
        if !(draft.price >= 0.0) {
            return Err(ListingError::NegativePrice(draft.price));
        }
        if !draft.location.is_valid() {
            return Err(ListingError::InvalidCoordinates {
                lat: draft.location.lat,
                lng: draft.location.lng,
            });
        }

        let billboard = Billboard {
            id: Uuid::new_v4(),
            owner_id: owner.id.to_string(),
            title: if draft.title.trim().is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                draft.title
            },
            description: draft.description,
            price: draft.price,
            size: if draft.size.trim().is_empty() {
                DEFAULT_SIZE.to_string()
            } else {
                draft.size
            },
            location: draft.location,
            address: draft.address,
            active: true,
        };
        info!("Billboard listed: {} ({})", billboard.id, billboard.title);
        self.billboards.insert(0, billboard.clone());
        Ok(billboard)
    }

    /// Flip the active flag. Owning user only. Returns the new flag.
    pub fn toggle_active(&mut self, id: Uuid, owner_id: &str) -> Result<bool, ListingError> {
        let billboard = self
            .billboards
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(ListingError::NotFound(id))?;
        if billboard.owner_id != owner_id {
            return Err(ListingError::NotListingOwner(id));
        }
        billboard.active = !billboard.active;
        Ok(billboard.active)
    }

    /// Remove a listing. Rejected while any non-canceled booking
    /// still references the billboard; those must be canceled first.
    pub fn remove(
        &mut self,
        id: Uuid,
        owner_id: &str,
        bookings: &[Booking],
    ) -> Result<Billboard, ListingError> {
        let pos = self
            .billboards
            .iter()
            .position(|b| b.id == id)
            .ok_or(ListingError::NotFound(id))?;
        if self.billboards[pos].owner_id != owner_id {
            return Err(ListingError::NotListingOwner(id));
        }
        if has_active_bookings(id, bookings) {
            return Err(ListingError::HasBookings(id));
        }

        let removed = self.billboards.remove(pos);
        info!("Billboard removed: {} ({})", removed.id, removed.title);
        Ok(removed)
    }

    pub fn get(&self, id: Uuid) -> Option<&Billboard> {
        self.billboards.iter().find(|b| b.id == id)
    }

    pub fn by_owner(&self, owner_id: &str) -> Vec<Billboard> {
        self.billboards
            .iter()
            .filter(|b| b.owner_id == owner_id)
            .cloned()
            .collect()
    }

    pub fn active(&self) -> Vec<Billboard> {
        self.billboards.iter().filter(|b| b.active).cloned().collect()
    }
}

/// Case-insensitive keyword match over title, address and
/// description. Order preserved.
pub fn filter_keyword(candidates: &[Billboard], text: &str) -> Vec<Billboard> {
    let needle = text.to_lowercase();
    candidates
        .iter()
        .filter(|b| {
            format!("{} {} {}", b.title, b.address, b.description)
                .to_lowercase()
                .contains(&needle)
        })
        .cloned()
        .collect()
}
