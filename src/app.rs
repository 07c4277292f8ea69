//! PantryFinder Frontend App
//!
//! Composition root: owns the collections, the filter and the panel state,
//! fetches everything once on mount and switches between the landing page
//! and the finder layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Landing, PantryControls, PantryMap, SideNav};
use crate::context::AppContext;
use crate::models::{CategoryFilter, MapMode, Pantry, PanelEvent, PanelState};
use crate::store::{
    store_collections, store_load_candidates, store_load_pantries, store_load_politicians,
    AppState,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(signal(PanelState::new()), signal(CategoryFilter::default()));
    provide_context(ctx);

    let (show_finder, set_show_finder) = signal(false);

    // Each collection loads independently; a failed fetch leaves it empty
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_pantries().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} pantries", loaded.len()).into());
                    store_load_pantries(&store, loaded);
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load pantries: {}", e).into()),
            }
        });
        spawn_local(async move {
            match commands::list_politicians().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} politicians", loaded.len()).into());
                    store_load_politicians(&store, loaded);
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load politicians: {}", e).into()),
            }
        });
        spawn_local(async move {
            match commands::list_candidates().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} candidates", loaded.len()).into());
                    store_load_candidates(&store, loaded);
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] Failed to load candidates: {}", e).into()),
            }
        });
    });

    let visible = Memo::new(move |_| ctx.filter.with(|f| store_collections(&store).visible(f)));
    let preview = Memo::new(move |_| store_collections(&store).visible(&CategoryFilter::default()));

    let open_finder = move |event: PanelEvent| {
        ctx.dispatch(event);
        set_show_finder.set(true);
    };
    let on_view_details = Callback::new(move |pantry: Pantry| ctx.dispatch(PanelEvent::ViewDetails(pantry)));

    view! {
        <Show
            when=move || show_finder.get()
            fallback=move || view! {
                <Landing
                    preview=preview
                    on_find=move |_| open_finder(PanelEvent::SelectFind)
                    on_host=move |_| open_finder(PanelEvent::SelectHost)
                />
            }
        >
            <div class="finder">
                <header class="finder-header">
                    <button class="back-btn" on:click=move |_| set_show_finder.set(false)>
                        "← Home"
                    </button>
                    <h1>"PantryFinder"</h1>
                </header>
                <div class="app-layout">
                    <SideNav />
                    <main class="map-column">
                        <PantryMap visible=visible mode=MapMode::Full on_view_details=on_view_details />
                    </main>
                    <aside class="controls-column">
                        <PantryControls />
                    </aside>
                </div>
            </div>
        </Show>
    }
}
