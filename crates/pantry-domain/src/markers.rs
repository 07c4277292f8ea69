//! Marker Layout
//!
//! Turns visible collections into the flat list of markers the map draws.
//! Layout is pure; the renderer only binds these specs to map objects.

use crate::candidate::Candidate;
use crate::collections::VisibleCollections;
use crate::entity::Entity;
use crate::geo::LatLng;
use crate::icons::{resolve_default_icon, IconDescriptor};
use crate::pantry::{Pantry, PantryType};
use crate::politician::Politician;

/// What a marker represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Pantry(PantryType),
    Politician,
    Candidate,
}

impl MarkerKind {
    pub fn is_pantry(&self) -> bool {
        matches!(self, MarkerKind::Pantry(_))
    }
}

/// Popup content attached to a marker
#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    /// Pantry summary with a "View Details" action
    Pantry {
        name: String,
        address: String,
        notes: String,
    },
    /// Politician or candidate identity with an outbound link
    Official {
        name: String,
        office: String,
        state: String,
        district: Option<String>,
        party: Option<String>,
        link: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Identity, `"<collection>-<id>"` (plus a seat suffix for Senate)
    pub key: String,
    pub kind: MarkerKind,
    pub entity_id: u32,
    pub position: LatLng,
    pub icon: IconDescriptor,
    pub popup: Popup,
}

fn reference_link(name: &str, website: Option<&str>) -> String {
    match website.map(str::trim).filter(|w| !w.is_empty()) {
        Some(site) => site.to_string(),
        None => format!("https://ballotpedia.org/{}", name.trim().replace(' ', "_")),
    }
}

pub fn pantry_marker(pantry: &Pantry) -> MarkerSpec {
    let kind = MarkerKind::Pantry(pantry.kind);
    MarkerSpec {
        key: pantry.marker_key(),
        kind,
        entity_id: pantry.id,
        position: pantry.position(),
        icon: resolve_default_icon(kind),
        popup: Popup::Pantry {
            name: pantry.name.clone(),
            address: pantry.address.clone(),
            notes: pantry.notes.clone(),
        },
    }
}

/// One marker per seat: two for Senate offices, one otherwise
pub fn politician_markers(politician: &Politician) -> Vec<MarkerSpec> {
    let seats = politician.seat_positions();
    let single = seats.len() == 1;
    let popup = Popup::Official {
        name: politician.name.clone(),
        office: politician.office.clone(),
        state: politician.state.clone(),
        district: politician.district.clone(),
        party: None,
        link: reference_link(&politician.name, politician.website.as_deref()),
    };

    seats
        .into_iter()
        .enumerate()
        .map(|(i, position)| MarkerSpec {
            key: if single {
                politician.marker_key()
            } else {
                format!("{}-seat{}", politician.marker_key(), i + 1)
            },
            kind: MarkerKind::Politician,
            entity_id: politician.id,
            position,
            icon: resolve_default_icon(MarkerKind::Politician),
            popup: popup.clone(),
        })
        .collect()
}

pub fn candidate_marker(candidate: &Candidate) -> MarkerSpec {
    MarkerSpec {
        key: candidate.marker_key(),
        kind: MarkerKind::Candidate,
        entity_id: candidate.id,
        position: candidate.position(),
        icon: resolve_default_icon(MarkerKind::Candidate),
        popup: Popup::Official {
            name: candidate.name.clone(),
            office: if candidate.office_type.is_empty() {
                candidate.office.clone()
            } else {
                candidate.office_type.clone()
            },
            state: candidate.state.clone(),
            district: candidate.district.clone(),
            party: Some(candidate.party.clone()).filter(|p| !p.is_empty()),
            link: reference_link(&candidate.name, Some(&candidate.website)),
        },
    }
}

/// Every marker for the visible collections: pantries, then politicians,
/// then candidates
pub fn layout(visible: &VisibleCollections) -> Vec<MarkerSpec> {
    let mut markers: Vec<MarkerSpec> = visible.pantries.iter().map(pantry_marker).collect();
    markers.extend(visible.politicians.iter().flat_map(politician_markers));
    markers.extend(visible.candidates.iter().map(candidate_marker));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryFilter};
    use crate::collections::{accept_pantry, Collections};
    use crate::pantry::NewPantry;
    use std::collections::HashSet;

    fn politician(id: u32, office: &str) -> Politician {
        Politician {
            id,
            name: format!("Rep {}", id),
            office: office.to_string(),
            state: "Kansas".to_string(),
            district: Some("3".to_string()),
            lat: 38.5,
            lng: -98.0,
            website: None,
        }
    }

    fn test_pantry() -> Pantry {
        NewPantry {
            name: "Test Pantry".to_string(),
            address: "1 Main St".to_string(),
            notes: String::new(),
            hours: String::new(),
            kind: PantryType::Food,
            lat: 1.0,
            lng: 2.0,
        }
        .into_pantry(1)
    }

    #[test]
    fn test_empty_collections_have_no_markers() {
        let c = Collections::default();
        assert!(layout(&c.visible(&CategoryFilter::default())).is_empty());
    }

    #[test]
    fn test_senate_and_house_marker_counts() {
        let visible = VisibleCollections {
            politicians: vec![politician(1, "Senate"), politician(2, "House"), politician(3, "Senate")],
            ..Default::default()
        };
        let markers = layout(&visible);
        let count = |id| markers.iter().filter(|m| m.entity_id == id).count();
        assert_eq!(count(1), 2);
        assert_eq!(count(2), 1);
        assert_eq!(count(3), 2);
    }

    #[test]
    fn test_marker_keys_are_unique() {
        let visible = VisibleCollections {
            pantries: vec![test_pantry()],
            politicians: vec![politician(1, "Senate"), politician(2, "House")],
            candidates: vec![],
        };
        let markers = layout(&visible);
        let keys: HashSet<_> = markers.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys.len(), markers.len());
        assert!(keys.contains("pantries-1"));
        assert!(keys.contains("politicians-1-seat1"));
        assert!(keys.contains("politicians-1-seat2"));
        assert!(keys.contains("politicians-2"));
    }

    #[test]
    fn test_official_link_prefers_website() {
        let mut p = politician(5, "House");
        assert_eq!(
            politician_markers(&p)[0].popup,
            Popup::Official {
                name: "Rep 5".to_string(),
                office: "House".to_string(),
                state: "Kansas".to_string(),
                district: Some("3".to_string()),
                party: None,
                link: "https://ballotpedia.org/Rep_5".to_string(),
            }
        );
        p.website = Some("https://rep5.example".to_string());
        match &politician_markers(&p)[0].popup {
            Popup::Official { link, .. } => assert_eq!(link, "https://rep5.example"),
            other => panic!("unexpected popup {:?}", other),
        }
    }

    #[test]
    fn test_submitted_pantry_shows_then_hides_with_filter() {
        let mut c = Collections::default();
        let mut filter = CategoryFilter::default();
        assert!(accept_pantry(&mut c.pantries, test_pantry()));

        let markers = layout(&c.visible(&filter));
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].key, "pantries-1");

        // no refetch: same collections, different filter
        filter.toggle(Category::Food);
        assert!(layout(&c.visible(&filter)).is_empty());
        assert_eq!(c.pantries.len(), 1);
    }
}
