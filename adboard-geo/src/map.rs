use adboard_domain::Coordinates;

/// Degrees of bounding box padded around a selected point.
const SELECTION_SPAN_DEG: f64 = 0.05;

/// Static viewport parameters for the embedded map viewer: bounding
/// box plus an optional marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
    pub zoom: u8,
    pub marker: Option<Coordinates>,
}

impl MapViewport {
    /// Viewport around a selected point, or the world view when
    /// nothing is selected.
    pub fn for_selection(selected: Option<Coordinates>) -> Self {
        match selected {
            Some(point) => Self {
                min_lng: point.lng - SELECTION_SPAN_DEG,
                min_lat: point.lat - SELECTION_SPAN_DEG,
                max_lng: point.lng + SELECTION_SPAN_DEG,
                max_lat: point.lat + SELECTION_SPAN_DEG,
                zoom: 14,
                marker: Some(point),
            },
            None => {
                let center = Coordinates::new(20.0, 0.0);
                Self {
                    min_lng: center.lng - SELECTION_SPAN_DEG,
                    min_lat: center.lat - SELECTION_SPAN_DEG,
                    max_lng: center.lng + SELECTION_SPAN_DEG,
                    max_lat: center.lat + SELECTION_SPAN_DEG,
                    zoom: 2,
                    marker: None,
                }
            }
        }
    }

    /// URL for the OpenStreetMap export/embed viewer.
    pub fn embed_url(&self, base: &str) -> String {
        let mut url = format!(
            "{}/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik",
            base.trim_end_matches('/'),
            self.min_lng,
            self.min_lat,
            self.max_lng,
            self.max_lat,
        );
        if let Some(marker) = self.marker {
            url.push_str(&format!("&mlat={}&mlon={}", marker.lat, marker.lng));
        }
        url
    }
}
