use adboard_domain::{Billboard, Coordinates};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers,
/// via the haversine formula.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Keep billboards within `radius_km` of `origin`. A filter, not a
/// sort: input order is preserved.
pub fn within_radius(origin: Coordinates, radius_km: f64, candidates: &[Billboard]) -> Vec<Billboard> {
    candidates
        .iter()
        .filter(|b| distance_km(origin, b.location) <= radius_km)
        .cloned()
        .collect()
}
