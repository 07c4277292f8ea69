//! Side panel state machine
//!
//! find | host | details | running. All transitions are user or completion
//! triggered; none are timed.

use crate::pantry::Pantry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelView {
    #[default]
    Find,
    Host,
    Details,
    Running,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    SelectFind,
    SelectHost,
    SelectRunning,
    /// "View Details" clicked in a pantry popup
    ViewDetails(Pantry),
    /// The host form's submission succeeded
    PantrySubmitted,
    /// The host form's submission failed; the form shows the error
    PantrySubmitFailed,
}

/// What the panel should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelContent<'a> {
    Filters,
    HostForm,
    Details(&'a Pantry),
    NothingSelected,
    RunningForm,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub view: PanelView,
    pub selected: Option<Pantry>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::SelectFind => self.view = PanelView::Find,
            PanelEvent::SelectHost => self.view = PanelView::Host,
            PanelEvent::SelectRunning => self.view = PanelView::Running,
            PanelEvent::ViewDetails(pantry) => {
                self.selected = Some(pantry);
                self.view = PanelView::Details;
            }
            PanelEvent::PantrySubmitted => {
                if self.view == PanelView::Host {
                    self.view = PanelView::Find;
                }
            }
            PanelEvent::PantrySubmitFailed => {}
        }
    }

    pub fn content(&self) -> PanelContent<'_> {
        match (self.view, &self.selected) {
            (PanelView::Find, _) => PanelContent::Filters,
            (PanelView::Host, _) => PanelContent::HostForm,
            (PanelView::Details, Some(pantry)) => PanelContent::Details(pantry),
            (PanelView::Details, None) => PanelContent::NothingSelected,
            (PanelView::Running, _) => PanelContent::RunningForm,
        }
    }

    /// The title header is shown everywhere except the find view
    pub fn shows_header(&self) -> bool {
        self.view != PanelView::Find
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantry::{NewPantry, PantryType};

    fn pantry() -> Pantry {
        NewPantry {
            name: "Depot".to_string(),
            address: "2 Elm".to_string(),
            notes: String::new(),
            hours: "9-5".to_string(),
            kind: PantryType::Clothing,
            lat: 0.0,
            lng: 0.0,
        }
        .into_pantry(12)
    }

    #[test]
    fn test_starts_on_find() {
        let state = PanelState::new();
        assert_eq!(state.view, PanelView::Find);
        assert_eq!(state.content(), PanelContent::Filters);
        assert!(!state.shows_header());
    }

    #[test]
    fn test_host_round_trip_on_success() {
        let mut state = PanelState::new();
        state.apply(PanelEvent::SelectHost);
        assert_eq!(state.content(), PanelContent::HostForm);
        state.apply(PanelEvent::PantrySubmitFailed);
        assert_eq!(state.view, PanelView::Host);
        state.apply(PanelEvent::PantrySubmitted);
        assert_eq!(state.view, PanelView::Find);
    }

    #[test]
    fn test_submitted_outside_host_is_ignored() {
        let mut state = PanelState::new();
        state.apply(PanelEvent::SelectRunning);
        state.apply(PanelEvent::PantrySubmitted);
        assert_eq!(state.view, PanelView::Running);
    }

    #[test]
    fn test_view_details_from_any_view() {
        for start in [PanelEvent::SelectFind, PanelEvent::SelectHost, PanelEvent::SelectRunning] {
            let mut state = PanelState::new();
            state.apply(start);
            state.apply(PanelEvent::ViewDetails(pantry()));
            assert_eq!(state.view, PanelView::Details);
            assert!(matches!(state.content(), PanelContent::Details(p) if p.id == 12));
        }
    }

    #[test]
    fn test_details_without_selection_is_placeholder() {
        let state = PanelState {
            view: PanelView::Details,
            selected: None,
        };
        assert_eq!(state.content(), PanelContent::NothingSelected);
        assert!(state.shows_header());
    }
}
