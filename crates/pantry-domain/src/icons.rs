//! Marker Icon Resolver
//!
//! Maps marker kinds to coloured pin images. Random icons are a transient
//! click effect on pantry markers and live only in [`IconOverrides`].

use std::collections::HashMap;

use crate::markers::{MarkerKind, MarkerSpec};
use crate::pantry::PantryType;

const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img";
const SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Red,
    Green,
    Orange,
    Yellow,
    Violet,
    Grey,
    Black,
    Gold,
    Blue,
    Purple,
}

impl MarkerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::Orange => "orange",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Violet => "violet",
            MarkerColor::Grey => "grey",
            MarkerColor::Black => "black",
            MarkerColor::Gold => "gold",
            MarkerColor::Blue => "blue",
            MarkerColor::Purple => "purple",
        }
    }
}

/// Colours a clicked pantry marker may switch to
pub const RANDOM_PALETTE: [MarkerColor; 10] = [
    MarkerColor::Red,
    MarkerColor::Green,
    MarkerColor::Orange,
    MarkerColor::Yellow,
    MarkerColor::Violet,
    MarkerColor::Grey,
    MarkerColor::Black,
    MarkerColor::Gold,
    MarkerColor::Blue,
    MarkerColor::Purple,
];

/// Everything needed to draw a marker pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconDescriptor {
    pub color: MarkerColor,
}

impl IconDescriptor {
    pub const ICON_SIZE: [i32; 2] = [25, 41];
    pub const ICON_ANCHOR: [i32; 2] = [12, 41];
    pub const POPUP_ANCHOR: [i32; 2] = [1, -34];
    pub const SHADOW_SIZE: [i32; 2] = [41, 41];

    pub fn new(color: MarkerColor) -> Self {
        Self { color }
    }

    pub fn icon_url(&self) -> String {
        format!("{}/marker-icon-2x-{}.png", ICON_BASE_URL, self.color.as_str())
    }

    pub fn shadow_url(&self) -> &'static str {
        SHADOW_URL
    }
}

/// Fixed icon for a marker kind. Unlisted pantry types fall back to grey.
pub fn resolve_default_icon(kind: MarkerKind) -> IconDescriptor {
    let color = match kind {
        MarkerKind::Pantry(PantryType::Food) => MarkerColor::Green,
        MarkerKind::Pantry(PantryType::Clothing) => MarkerColor::Violet,
        MarkerKind::Pantry(PantryType::Resource) => MarkerColor::Orange,
        MarkerKind::Pantry(PantryType::Library) => MarkerColor::Blue,
        MarkerKind::Pantry(PantryType::Unlisted) => MarkerColor::Grey,
        MarkerKind::Politician => MarkerColor::Red,
        MarkerKind::Candidate => MarkerColor::Gold,
    };
    IconDescriptor::new(color)
}

/// Random palette icon for pantry markers; `roll` is uniform in `[0, 1)`.
/// Politician and candidate markers keep their default icon.
pub fn resolve_random_icon(kind: MarkerKind, roll: f64) -> IconDescriptor {
    match kind {
        MarkerKind::Pantry(_) => {
            let index = (roll.clamp(0.0, 1.0) * RANDOM_PALETTE.len() as f64) as usize;
            IconDescriptor::new(RANDOM_PALETTE[index.min(RANDOM_PALETTE.len() - 1)])
        }
        MarkerKind::Politician | MarkerKind::Candidate => resolve_default_icon(kind),
    }
}

/// Per-render icon overrides keyed by marker key
#[derive(Debug, Clone, Default)]
pub struct IconOverrides {
    by_key: HashMap<String, IconDescriptor>,
}

impl IconOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon currently shown for a marker
    pub fn icon_for(&self, marker: &MarkerSpec) -> IconDescriptor {
        self.by_key.get(&marker.key).copied().unwrap_or(marker.icon)
    }

    /// Apply the click effect. Returns the new icon for pantry markers,
    /// `None` for markers that do not react.
    pub fn randomize(&mut self, marker: &MarkerSpec, roll: f64) -> Option<IconDescriptor> {
        if !marker.kind.is_pantry() {
            return None;
        }
        let icon = resolve_random_icon(marker.kind, roll);
        self.by_key.insert(marker.key.clone(), icon);
        Some(icon)
    }

    /// Forget every override; called on full re-render
    pub fn clear(&mut self) {
        self.by_key.clear();
    }
}
