//! Candidate Entity
//!
//! People who registered through the "running for office" form, plus the
//! rules that turn the form's checkboxes into a submission.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::flag;
use crate::geo::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub state: String,
    pub office: String,
    /// Free text: every checked office joined by ", "
    #[serde(default)]
    pub office_type: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(with = "flag")]
    pub show_on_map: bool,
    pub lat: f64,
    pub lng: f64,
}

impl Candidate {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl Entity for Candidate {
    type Id = u32;
    const COLLECTION: &'static str = "candidates";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Candidate submission: everything but `id`, `lat` and `lng`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub country: String,
    pub state: String,
    pub office: String,
    #[serde(default)]
    pub office_type: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(with = "flag")]
    pub show_on_map: bool,
}

impl NewCandidate {
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("country", &self.country),
            ("state", &self.state),
            ("office", &self.office),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Candidate {} is required", field));
            }
        }
        Ok(())
    }

    /// Free-text region handed to the geocoder
    pub fn region_query(&self) -> String {
        format!("{}, {}", self.state.trim(), self.country.trim())
    }

    pub fn into_candidate(self, id: u32, position: LatLng) -> Candidate {
        Candidate {
            id,
            name: self.name,
            country: self.country,
            state: self.state,
            office: self.office,
            office_type: self.office_type,
            district: self.district,
            party: self.party,
            website: self.website,
            phone: self.phone,
            show_on_map: self.show_on_map,
            lat: position.lat,
            lng: position.lng,
        }
    }
}

/// Office checkboxes offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficeChoice {
    House,
    Senate,
    HeadOfState,
    StateHouse,
    StateSenate,
    Other,
}

impl OfficeChoice {
    pub const ALL: [OfficeChoice; 6] = [
        OfficeChoice::House,
        OfficeChoice::Senate,
        OfficeChoice::HeadOfState,
        OfficeChoice::StateHouse,
        OfficeChoice::StateSenate,
        OfficeChoice::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OfficeChoice::House => "House",
            OfficeChoice::Senate => "Senate",
            OfficeChoice::HeadOfState => "Head of State/Gov",
            OfficeChoice::StateHouse => "State House",
            OfficeChoice::StateSenate => "State Senate",
            OfficeChoice::Other => "Other",
        }
    }
}

/// Why a form could not be turned into a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingName,
    MissingCountry,
    MissingState,
    NoOfficeSelected,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingName => write!(f, "Please enter your name."),
            FormError::MissingCountry => write!(f, "Please select a country."),
            FormError::MissingState => write!(f, "Please select a state or province."),
            FormError::NoOfficeSelected => write!(f, "Please select at least one office."),
        }
    }
}

impl std::error::Error for FormError {}

/// Raw input of the running-for-office form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateForm {
    pub name: String,
    pub country: String,
    pub state: String,
    /// Checked offices in the order they were checked
    pub offices: Vec<OfficeChoice>,
    pub website: String,
    pub phone: String,
    pub show_on_map: bool,
}

impl CandidateForm {
    /// Check or uncheck an office, keeping the check order
    pub fn set_office(&mut self, office: OfficeChoice, checked: bool) {
        self.offices.retain(|o| *o != office);
        if checked {
            self.offices.push(office);
        }
    }

    /// Build the submission. The stored `office` collapses to "Senate" when
    /// Senate is among the choices and "House" otherwise.
    pub fn to_submission(&self) -> Result<NewCandidate, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.country.trim().is_empty() {
            return Err(FormError::MissingCountry);
        }
        if self.state.trim().is_empty() {
            return Err(FormError::MissingState);
        }
        if self.offices.is_empty() {
            return Err(FormError::NoOfficeSelected);
        }

        let office = if self.offices.contains(&OfficeChoice::Senate) {
            "Senate"
        } else {
            "House"
        };
        let office_type = self
            .offices
            .iter()
            .map(OfficeChoice::label)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(NewCandidate {
            name: self.name.trim().to_string(),
            country: self.country.clone(),
            state: self.state.clone(),
            office: office.to_string(),
            office_type,
            district: None,
            party: String::new(),
            website: self.website.trim().to_string(),
            phone: self.phone.trim().to_string(),
            show_on_map: self.show_on_map,
        })
    }
}

/// Where a new candidate can read about getting on the ballot
pub fn ballot_access_link(country: &str, state: &str) -> String {
    if country == "USA" {
        format!(
            "https://ballotpedia.org/Ballot_access_for_major_and_minor_party_candidates_in_{}",
            state.replace(' ', "_")
        )
    } else {
        format!("https://en.wikipedia.org/wiki/Ballot_access#{}", country.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CandidateForm {
        CandidateForm {
            name: "Sam Rivera".to_string(),
            country: "USA".to_string(),
            state: "New Mexico".to_string(),
            show_on_map: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_senate_choice_collapses_office() {
        let mut f = form();
        f.set_office(OfficeChoice::StateHouse, true);
        f.set_office(OfficeChoice::Senate, true);
        let c = f.to_submission().unwrap();
        assert_eq!(c.office, "Senate");
        assert_eq!(c.office_type, "State House, Senate");
        assert_eq!(c.district, None);
        assert!(c.show_on_map);
    }

    #[test]
    fn test_non_senate_defaults_to_house() {
        let mut f = form();
        f.set_office(OfficeChoice::Other, true);
        assert_eq!(f.to_submission().unwrap().office, "House");
    }

    #[test]
    fn test_unchecking_removes_office() {
        let mut f = form();
        f.set_office(OfficeChoice::House, true);
        f.set_office(OfficeChoice::House, false);
        assert_eq!(f.to_submission(), Err(FormError::NoOfficeSelected));
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.name.clear();
        assert_eq!(f.to_submission(), Err(FormError::MissingName));
        let mut f = form();
        f.state.clear();
        f.set_office(OfficeChoice::House, true);
        assert_eq!(f.to_submission(), Err(FormError::MissingState));
    }

    #[test]
    fn test_ballot_access_links() {
        assert_eq!(
            ballot_access_link("USA", "New Mexico"),
            "https://ballotpedia.org/Ballot_access_for_major_and_minor_party_candidates_in_New_Mexico"
        );
        assert_eq!(
            ballot_access_link("United Kingdom", "Wales"),
            "https://en.wikipedia.org/wiki/Ballot_access#United_Kingdom"
        );
    }

    #[test]
    fn test_show_on_map_wire_format() {
        let json = r#"{"name":"A","country":"USA","state":"Ohio","office":"House","show_on_map":0}"#;
        let c: NewCandidate = serde_json::from_str(json).unwrap();
        assert!(!c.show_on_map);
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["show_on_map"], 0);
        assert_eq!(c.region_query(), "Ohio, USA");
    }
}
