//! Map viewport and interaction options.
//!
//! Field names serialize to the option names the map library expects.

use serde::Serialize;

/// Approximate geographic centre of the contiguous United States
pub const DEFAULT_CENTER: [f64; 2] = [39.8283, -98.5795];
pub const FULL_ZOOM: u8 = 4;
pub const PREVIEW_ZOOM: u8 = 3;

/// Delay before the one-shot layout recomputation after mount
pub const RESIZE_SETTLE_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    /// Decorative, non-interactive
    Preview,
    #[default]
    Full,
}

impl MapMode {
    pub fn is_interactive(&self) -> bool {
        matches!(self, MapMode::Full)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    pub zoom_control: bool,
    pub dragging: bool,
    pub scroll_wheel_zoom: bool,
    pub double_click_zoom: bool,
    pub touch_zoom: bool,
    pub box_zoom: bool,
    pub keyboard: bool,
    pub attribution_control: bool,
    /// Whether markers get popups bound; not a map option
    #[serde(skip)]
    pub popups: bool,
}

impl MapOptions {
    pub fn for_mode(mode: MapMode) -> Self {
        let interactive = mode.is_interactive();
        Self {
            center: DEFAULT_CENTER,
            zoom: if interactive { FULL_ZOOM } else { PREVIEW_ZOOM },
            zoom_control: interactive,
            dragging: interactive,
            scroll_wheel_zoom: interactive,
            double_click_zoom: interactive,
            touch_zoom: interactive,
            box_zoom: interactive,
            keyboard: interactive,
            attribution_control: interactive,
            popups: interactive,
        }
    }
}
