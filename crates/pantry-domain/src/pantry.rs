//! Pantry Entity
//!
//! A physical food/resource distribution location.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::entity::Entity;
use crate::flag;
use crate::geo::LatLng;

/// Pantry type determines filter category and default marker colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PantryType {
    Food,
    Clothing,
    Resource,
    Library,
    /// Any value the client does not know about
    #[serde(other)]
    Unlisted,
}

impl PantryType {
    pub const ALL: [PantryType; 4] = [
        PantryType::Food,
        PantryType::Clothing,
        PantryType::Resource,
        PantryType::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PantryType::Food => "food",
            PantryType::Clothing => "clothing",
            PantryType::Resource => "resource",
            PantryType::Library => "library",
            PantryType::Unlisted => "unlisted",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "food" => PantryType::Food,
            "clothing" => PantryType::Clothing,
            "resource" => PantryType::Resource,
            "library" => PantryType::Library,
            _ => PantryType::Unlisted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PantryType::Food => "Food",
            PantryType::Clothing => "Clothing",
            PantryType::Resource => "Resource",
            PantryType::Library => "Little Library",
            PantryType::Unlisted => "Other",
        }
    }

    /// Filter category, `None` for unlisted types
    pub fn category(&self) -> Option<Category> {
        match self {
            PantryType::Food => Some(Category::Food),
            PantryType::Clothing => Some(Category::Clothing),
            PantryType::Resource => Some(Category::Resource),
            PantryType::Library => Some(Category::Library),
            PantryType::Unlisted => None,
        }
    }
}

/// A pantry listing as stored and served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pantry {
    pub id: u32,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hours: String,
    #[serde(rename = "type")]
    pub kind: PantryType,
    pub lat: f64,
    pub lng: f64,
    /// Soft-delete marker, 0/1 on the wire
    #[serde(with = "flag", default)]
    pub deleted: bool,
}

impl Pantry {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}

impl Entity for Pantry {
    type Id = u32;
    const COLLECTION: &'static str = "pantries";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Pantry submission: everything but `id` and `deleted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPantry {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hours: String,
    #[serde(rename = "type")]
    pub kind: PantryType,
    pub lat: f64,
    pub lng: f64,
}

impl NewPantry {
    /// Check the draft before it is persisted
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Pantry name is required".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("Pantry address is required".to_string());
        }
        if self.kind == PantryType::Unlisted {
            return Err("Pantry type must be one of food, clothing, resource, library".to_string());
        }
        if !LatLng::new(self.lat, self.lng).is_valid() {
            return Err(format!("Invalid coordinates ({}, {})", self.lat, self.lng));
        }
        Ok(())
    }

    /// Materialize the stored record once the store assigned an id
    pub fn into_pantry(self, id: u32) -> Pantry {
        Pantry {
            id,
            name: self.name,
            address: self.address,
            notes: self.notes,
            hours: self.hours,
            kind: self.kind,
            lat: self.lat,
            lng: self.lng,
            deleted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPantry {
        NewPantry {
            name: "Test Pantry".to_string(),
            address: "1 Main St".to_string(),
            notes: String::new(),
            hours: String::new(),
            kind: PantryType::Food,
            lat: 1.0,
            lng: 2.0,
        }
    }

    #[test]
    fn test_unknown_type_decodes_as_unlisted() {
        let json = r#"{"id":3,"name":"X","address":"Y","type":"garden","lat":0,"lng":0,"deleted":0}"#;
        let pantry: Pantry = serde_json::from_str(json).unwrap();
        assert_eq!(pantry.kind, PantryType::Unlisted);
        assert_eq!(pantry.kind.category(), None);
    }

    #[test]
    fn test_deleted_flag_wire_format() {
        let pantry = draft().into_pantry(7);
        let value = serde_json::to_value(&pantry).unwrap();
        assert_eq!(value["deleted"], 0);
        assert_eq!(value["type"], "food");
        assert_eq!(pantry.marker_key(), "pantries-7");

        let json = r#"{"id":1,"name":"X","address":"Y","type":"food","lat":0,"lng":0,"deleted":true}"#;
        let pantry: Pantry = serde_json::from_str(json).unwrap();
        assert!(!pantry.is_live());
    }

    #[test]
    fn test_draft_defaults_optional_text() {
        let json = r#"{"name":"Test Pantry","address":"1 Main St","lat":1.0,"lng":2.0,"type":"food"}"#;
        let parsed: NewPantry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, draft());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(d.validate().is_err());

        let mut d = draft();
        d.kind = PantryType::Unlisted;
        assert!(d.validate().is_err());

        let mut d = draft();
        d.lat = 120.0;
        assert!(d.validate().is_err());
    }
}
