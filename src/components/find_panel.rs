//! Find Panel Component
//!
//! Category checkboxes controlling which markers the map shows.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Category;

#[component]
pub fn FindPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let category_row = move |category: Category| {
        let id = format!("category-{}", category.as_str());
        let label_for = id.clone();
        view! {
            <label class=if category.is_meta() { "category-option meta" } else { "category-option" } for=label_for>
                <input
                    type="checkbox"
                    id=id
                    prop:checked=move || ctx.filter.with(|f| f.is_active(category))
                    on:change=move |_| ctx.toggle_category(category)
                />
                {category.label()}
            </label>
        }
    };

    view! {
        <div class="find-panel">
            <h3>"Find a Pantry"</h3>
            <p class="hint">"Choose what to show on the map."</p>
            <div class="category-list">
                {Category::PANTRY.into_iter().map(category_row).collect_view()}
            </div>
            <h4>"Civic layers"</h4>
            <div class="category-list">
                {Category::ALL.into_iter().filter(Category::is_meta).map(category_row).collect_view()}
            </div>
            <div class="category-actions">
                <button type="button" class="link-btn" on:click=move |_| ctx.set_category_tags(&["food", "clothing", "resource", "library", "politicians", "candidates"])>
                    "Show all"
                </button>
                <button type="button" class="link-btn" on:click=move |_| ctx.set_category_tags(&[])>
                    "Clear"
                </button>
            </div>
        </div>
    }
}
