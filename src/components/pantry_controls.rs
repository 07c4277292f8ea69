//! Pantry Controls Component
//!
//! Right-hand panel: renders whichever view the panel state selects.

use leptos::prelude::*;

use crate::components::{FindPanel, HostPantryForm, PantryDetails, RunningForOfficeForm};
use crate::context::AppContext;
use crate::models::PanelContent;

#[component]
pub fn PantryControls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="pantry-controls">
            <Show when=move || ctx.panel.with(|p| p.shows_header())>
                <h2 class="panel-title">"PantryFinder"</h2>
            </Show>
            {move || ctx.panel.with(|state| match state.content() {
                PanelContent::Filters => view! { <FindPanel /> }.into_any(),
                PanelContent::HostForm => view! { <HostPantryForm /> }.into_any(),
                PanelContent::Details(pantry) => view! { <PantryDetails pantry=pantry.clone() /> }.into_any(),
                PanelContent::NothingSelected => view! {
                    <p class="panel-placeholder">"No pantry selected."</p>
                }.into_any(),
                PanelContent::RunningForm => view! { <RunningForOfficeForm /> }.into_any(),
            })}
        </div>
    }
}
