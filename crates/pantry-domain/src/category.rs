//! Category Filter
//!
//! The set of active category tags. Pantry types filter individual pantries;
//! `politicians` and `candidates` switch whole layers on or off.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::collections::{Collections, VisibleCollections};
use crate::pantry::Pantry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Clothing,
    Resource,
    Library,
    Politicians,
    Candidates,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Clothing,
        Category::Resource,
        Category::Library,
        Category::Politicians,
        Category::Candidates,
    ];

    /// Categories a pantry can carry
    pub const PANTRY: [Category; 4] = [
        Category::Food,
        Category::Clothing,
        Category::Resource,
        Category::Library,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Resource => "resource",
            Category::Library => "library",
            Category::Politicians => "politicians",
            Category::Candidates => "candidates",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food Pantries",
            Category::Clothing => "Clothing",
            Category::Resource => "Resource Centers",
            Category::Library => "Little Libraries",
            Category::Politicians => "Elected Officials",
            Category::Candidates => "Candidates",
        }
    }

    /// Layer toggles rather than per-entity properties
    pub fn is_meta(&self) -> bool {
        matches!(self, Category::Politicians | Category::Candidates)
    }
}

/// Active category tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: BTreeSet<Category>,
}

impl Default for CategoryFilter {
    /// Every pantry category; politicians and candidates start hidden
    fn default() -> Self {
        Self {
            active: Category::PANTRY.into_iter().collect(),
        }
    }
}

impl CategoryFilter {
    pub fn empty() -> Self {
        Self { active: BTreeSet::new() }
    }

    /// Replace the active set
    pub fn set_active(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.active = categories.into_iter().collect();
    }

    /// Replace the active set from raw tags; unknown tags are ignored
    pub fn set_active_tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) {
        self.set_active(tags.into_iter().filter_map(Category::parse));
    }

    pub fn toggle(&mut self, category: Category) {
        if !self.active.remove(&category) {
            self.active.insert(category);
        }
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        self.active.iter().copied()
    }

    pub fn shows_pantry(&self, pantry: &Pantry) -> bool {
        pantry.kind.category().is_some_and(|c| self.is_active(c))
    }

    pub fn shows_politicians(&self) -> bool {
        self.is_active(Category::Politicians)
    }

    pub fn shows_candidates(&self) -> bool {
        self.is_active(Category::Candidates)
    }

    pub fn visible(&self, collections: &Collections) -> VisibleCollections {
        collections.visible(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry::PantryType;

    fn pantry(id: u32, kind: PantryType) -> Pantry {
        Pantry {
            id,
            name: format!("Pantry {}", id),
            address: "Somewhere".to_string(),
            notes: String::new(),
            hours: String::new(),
            kind,
            lat: 0.0,
            lng: 0.0,
            deleted: false,
        }
    }

    #[test]
    fn test_default_hides_meta_layers() {
        let filter = CategoryFilter::default();
        for c in Category::PANTRY {
            assert!(filter.is_active(c));
        }
        assert!(!filter.shows_politicians());
        assert!(!filter.shows_candidates());
    }

    #[test]
    fn test_pantry_visible_iff_type_active() {
        let kinds = [
            PantryType::Food,
            PantryType::Clothing,
            PantryType::Resource,
            PantryType::Library,
            PantryType::Unlisted,
        ];
        // every subset of the six categories
        for mask in 0u32..(1 << Category::ALL.len()) {
            let mut filter = CategoryFilter::empty();
            filter.set_active(
                Category::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| c),
            );
            for (i, kind) in kinds.into_iter().enumerate() {
                let p = pantry(i as u32, kind);
                let expected = kind.category().is_some_and(|c| {
                    let bit = Category::ALL.iter().position(|a| *a == c).unwrap();
                    mask & (1 << bit) != 0
                });
                assert_eq!(filter.shows_pantry(&p), expected);
            }
        }
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let mut filter = CategoryFilter::default();
        filter.set_active_tags(["food", "parks", "candidates"]);
        assert_eq!(
            filter.active().collect::<Vec<_>>(),
            vec![Category::Food, Category::Candidates]
        );
    }

    #[test]
    fn test_toggle() {
        let mut filter = CategoryFilter::default();
        filter.toggle(Category::Food);
        assert!(!filter.is_active(Category::Food));
        filter.toggle(Category::Politicians);
        assert!(filter.shows_politicians());
    }
}
