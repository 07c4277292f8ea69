//! Landing Page Component
//!
//! Hero text, entry buttons into the finder and a static map preview.

use leptos::prelude::*;

use crate::components::PantryMap;
use crate::models::{MapMode, VisibleCollections};

#[component]
pub fn Landing(
    #[prop(into)] preview: Signal<VisibleCollections>,
    #[prop(into)] on_find: Callback<()>,
    #[prop(into)] on_host: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="landing">
            <section class="hero">
                <div class="hero-text">
                    <h1>"Find, Share, and Support"<br/>"Local Food Pantries"</h1>
                    <p>
                        "PantryFinder maps community food, clothing and resource pantries, "
                        "along with the people representing and running to represent your area."
                    </p>
                    <div class="hero-actions">
                        <button class="primary-btn" on:click=move |_| on_find.run(())>
                            "Find a Pantry"
                        </button>
                        <button class="secondary-btn" on:click=move |_| on_host.run(())>
                            "Host a Pantry"
                        </button>
                    </div>
                </div>
                <div class="hero-map">
                    <PantryMap visible=preview mode=MapMode::Preview />
                </div>
            </section>
            <footer class="landing-footer">
                <p>"PantryFinder · Built by volunteers for neighbors"</p>
            </footer>
        </div>
    }
}
