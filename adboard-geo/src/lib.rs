pub mod geocode;
pub mod haversine;
pub mod map;

pub use geocode::{GeocodeCandidate, Geocoder, NominatimClient};
pub use haversine::{distance_km, within_radius};
pub use map::MapViewport;
