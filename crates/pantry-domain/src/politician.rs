//! Politician Entity
//!
//! Office-holders shown for civic context. Read-only from the UI.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::geo::LatLng;

/// Coordinate delta between the two markers of a Senate office
pub const SENATE_SEAT_OFFSET: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Politician {
    pub id: u32,
    pub name: String,
    /// "House", "Senate" or another office title
    pub office: String,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub website: Option<String>,
}

impl Politician {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn is_senate(&self) -> bool {
        self.office.trim().eq_ignore_ascii_case("senate")
    }

    /// Marker positions for this record. Senate offices are drawn as two
    /// seats, the second nudged by [`SENATE_SEAT_OFFSET`].
    pub fn seat_positions(&self) -> Vec<LatLng> {
        let base = self.position();
        if self.is_senate() {
            vec![base, base.offset(SENATE_SEAT_OFFSET)]
        } else {
            vec![base]
        }
    }
}

impl Entity for Politician {
    type Id = u32;
    const COLLECTION: &'static str = "politicians";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Politician record without an id, used by the seed import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPolitician {
    pub name: String,
    pub office: String,
    pub state: String,
    #[serde(default)]
    pub district: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub website: Option<String>,
}

impl NewPolitician {
    pub fn into_politician(self, id: u32) -> Politician {
        Politician {
            id,
            name: self.name,
            office: self.office,
            state: self.state,
            district: self.district,
            lat: self.lat,
            lng: self.lng,
            website: self.website,
        }
    }
}
