//! Application Context
//!
//! Shared UI state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{Category, CategoryFilter, PanelEvent, PanelState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which side panel is shown and the selected pantry - read
    pub panel: ReadSignal<PanelState>,
    /// Which side panel is shown and the selected pantry - write
    set_panel: WriteSignal<PanelState>,
    /// Active map categories - read
    pub filter: ReadSignal<CategoryFilter>,
    /// Active map categories - write
    set_filter: WriteSignal<CategoryFilter>,
}

impl AppContext {
    pub fn new(
        panel: (ReadSignal<PanelState>, WriteSignal<PanelState>),
        filter: (ReadSignal<CategoryFilter>, WriteSignal<CategoryFilter>),
    ) -> Self {
        Self {
            panel: panel.0,
            set_panel: panel.1,
            filter: filter.0,
            set_filter: filter.1,
        }
    }

    /// Feed an event to the panel state machine. Subscribers are only
    /// notified when the state actually changes, so a failed submission
    /// does not re-render the form that reported it.
    pub fn dispatch(&self, event: PanelEvent) {
        let current = self.panel.get_untracked();
        let mut next = current.clone();
        next.apply(event);
        if next != current {
            self.set_panel.set(next);
        }
    }

    pub fn toggle_category(&self, category: Category) {
        self.set_filter.update(|f| f.toggle(category));
    }

    /// Replace the active categories from tag strings; unknown tags are
    /// ignored
    pub fn set_category_tags(&self, tags: &[&str]) {
        self.set_filter.update(|f| f.set_active_tags(tags.iter().copied()));
    }
}
