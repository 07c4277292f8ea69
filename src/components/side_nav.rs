//! Side Navigation Component
//!
//! Buttons that switch the side panel between its views.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{PanelEvent, PanelView};

#[component]
pub fn SideNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_view = move |view: PanelView| ctx.panel.with(|p| p.view == view);

    view! {
        <nav class="side-nav">
            <button
                class=move || if is_view(PanelView::Find) { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.dispatch(PanelEvent::SelectFind)
            >
                "Find a Pantry"
            </button>
            <button
                class=move || if is_view(PanelView::Host) { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.dispatch(PanelEvent::SelectHost)
            >
                "Know-of a Pantry? Host a Pantry?"
            </button>
            <button
                class=move || if is_view(PanelView::Running) { "nav-btn running active" } else { "nav-btn running" }
                on:click=move |_| ctx.dispatch(PanelEvent::SelectRunning)
            >
                "Running for Office?"
            </button>
        </nav>
    }
}
