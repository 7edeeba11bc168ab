use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A physical advertising display available for daily-rate booking.
///
/// The coordinate is flattened so the serialized document keeps `lat`
/// and `lng` as top-level fields, matching the stored layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    /// Daily rate in USD. Non-negative, enforced at creation.
    pub price: f64,
    /// Free-text physical dimensions, e.g. "14x48 ft".
    pub size: String,
    #[serde(flatten)]
    pub location: Coordinates,
    pub address: String,
    pub active: bool,
}
