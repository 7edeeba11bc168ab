use adboard_domain::Coordinates;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

/// A geocoding match: coordinate plus resolved display address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub location: Coordinates,
    pub address: String,
}

/// Free-text address lookup. Lookup failures never propagate: the
/// result is simply the empty list.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Vec<GeocodeCandidate>;
}

/// One row of a Nominatim search response. `lat`/`lon` arrive as
/// strings.
#[derive(Debug, Deserialize)]
struct NominatimRow {
    lat: String,
    lon: String,
    display_name: String,
}

/// Geocoding client for the Nominatim search endpoint.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    min_query_len: usize,
    limit: u32,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            min_query_len: 3,
            limit: 5,
        }
    }

    pub fn with_limits(mut self, min_query_len: usize, limit: u32) -> Self {
        self.min_query_len = min_query_len;
        self.limit = limit;
        self
    }

    async fn fetch(&self, query: &str) -> Result<Vec<NominatimRow>, reqwest::Error> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let limit = self.limit.to_string();
        self.http
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", limit.as_str())])
            .header("Accept-Language", "en")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Rows with unparseable coordinates are dropped.
fn parse_rows(rows: Vec<NominatimRow>) -> Vec<GeocodeCandidate> {
    rows.into_iter()
        .filter_map(|row| {
            let lat = row.lat.parse().ok()?;
            let lng = row.lon.parse().ok()?;
            Some(GeocodeCandidate {
                location: Coordinates::new(lat, lng),
                address: row.display_name,
            })
        })
        .collect()
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn search(&self, query: &str) -> Vec<GeocodeCandidate> {
        if query.chars().count() < self.min_query_len {
            return Vec::new();
        }
        match self.fetch(query).await {
            Ok(rows) => parse_rows(rows),
            Err(err) => {
                warn!("Geocoding lookup failed: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nominatim_response() {
        let body = r#"[
            {"lat": "40.7484", "lon": "-73.9857", "display_name": "Empire State Building, NYC"},
            {"lat": "not-a-number", "lon": "0", "display_name": "Broken row"}
        ]"#;
        let rows: Vec<NominatimRow> = serde_json::from_str(body).unwrap();

        let candidates = parse_rows(rows);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].address, "Empire State Building, NYC");
        assert!((candidates[0].location.lat - 40.7484).abs() < 1e-9);
        assert!((candidates[0].location.lng + 73.9857).abs() < 1e-9);
    }

    #[test]
    fn test_parse_empty_response() {
        let rows: Vec<NominatimRow> = serde_json::from_str("[]").unwrap();
        assert!(parse_rows(rows).is_empty());
    }
}
