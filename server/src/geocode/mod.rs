//! Address lookup
//!
//! `Geocoder` turns free text into coordinates. The server talks to a
//! Nominatim-compatible search endpoint; tests swap in a fixed table.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{DomainError, DomainResult, LatLng};

pub const USER_AGENT: &str = "PantryFinderApp/1.0";

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// First match for `query`, or `None` when nothing matches.
    /// Transport and upstream failures surface as `DomainError::Upstream`.
    async fn locate(&self, query: &str) -> DomainResult<Option<LatLng>>;
}

/// One hit from a Nominatim search. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_position(places: &[NominatimPlace]) -> DomainResult<Option<LatLng>> {
    let Some(place) = places.first() else {
        return Ok(None);
    };
    let lat = place.lat.parse::<f64>();
    let lng = place.lon.parse::<f64>();
    match (lat, lng) {
        (Ok(lat), Ok(lng)) if LatLng::new(lat, lng).is_valid() => Ok(Some(LatLng::new(lat, lng))),
        _ => Err(DomainError::Upstream(format!(
            "Geocoder returned unusable coordinates ({}, {})",
            place.lat, place.lon
        ))),
    }
}

pub struct NominatimGeocoder {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, query: &str) -> DomainResult<Option<LatLng>> {
        debug!("geocoding {:?}", query);

        let resp = self
            .http
            .get(self.search_url())
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("Geocoder request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("geocoder answered HTTP {}", status.as_u16());
            return Err(DomainError::Upstream(format!(
                "Geocoder HTTP {}",
                status.as_u16()
            )));
        }

        let places: Vec<NominatimPlace> = resp
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("Geocoder response unreadable: {e}")))?;

        first_position(&places)
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Answers from a fixed table. `failing()` simulates an unreachable
    /// upstream.
    #[derive(Default)]
    pub struct FixedGeocoder {
        pub known: HashMap<String, LatLng>,
        pub fail: bool,
    }

    impl FixedGeocoder {
        pub fn with(query: &str, position: LatLng) -> Self {
            let mut known = HashMap::new();
            known.insert(query.to_string(), position);
            Self { known, fail: false }
        }

        pub fn failing() -> Self {
            Self {
                known: HashMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn locate(&self, query: &str) -> DomainResult<Option<LatLng>> {
            if self.fail {
                return Err(DomainError::Upstream("Geocoder unreachable".to_string()));
            }
            Ok(self.known.get(query).copied())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_place_wins() {
        let places: Vec<NominatimPlace> = serde_json::from_str(
            r#"[{"lat":"34.0522","lon":"-118.2437","display_name":"LA"},
                {"lat":"1","lon":"2"}]"#,
        )
        .unwrap();

        let pos = first_position(&places).unwrap().unwrap();
        assert_eq!(pos, LatLng::new(34.0522, -118.2437));
    }

    #[test]
    fn test_no_places_is_none() {
        assert_eq!(first_position(&[]).unwrap(), None);
    }

    #[test]
    fn test_garbage_coordinates_are_upstream_errors() {
        let places = vec![NominatimPlace {
            lat: "north".to_string(),
            lon: "0".to_string(),
        }];
        assert!(matches!(
            first_position(&places),
            Err(DomainError::Upstream(_))
        ));
    }

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let geocoder = NominatimGeocoder::new("https://geo.example.org/");
        assert_eq!(geocoder.search_url(), "https://geo.example.org/search");
    }
}
