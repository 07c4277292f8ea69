//! Host Pantry Form Component
//!
//! Submits a new pantry: the address is geocoded first, then the listing is
//! created and appended to the map.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::{NewPantry, PanelEvent, PantryType};
use crate::store::{store_add_pantry, use_app_store};

#[component]
pub fn HostPantryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (kind, set_kind) = signal(PantryType::Food);
    let (hours, set_hours) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_address.set(String::new());
        set_kind.set(PantryType::Food);
        set_hours.set(String::new());
        set_notes.set(String::new());
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name = name.get_untracked();
        let address = address.get_untracked();
        if name.trim().is_empty() || address.trim().is_empty() {
            set_error.set(Some("Name and address are required.".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        let kind = kind.get_untracked();
        let hours = hours.get_untracked();
        let notes = notes.get_untracked();

        spawn_local(async move {
            let result = async {
                let position = commands::geocode(&address).await?;
                let draft = NewPantry {
                    name: name.trim().to_string(),
                    address: address.trim().to_string(),
                    notes,
                    hours,
                    kind,
                    lat: position.lat,
                    lng: position.lng,
                };
                commands::create_pantry(&draft).await
            }
            .await;

            match result {
                Ok(pantry) => {
                    web_sys::console::log_1(&format!("[HOST] Created pantry {}", pantry.id).into());
                    store_add_pantry(&store, pantry);
                    reset();
                    ctx.dispatch(PanelEvent::PantrySubmitted);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[HOST] Submit failed: {}", e).into());
                    set_error.set(Some(format!("Could not add pantry: {}", e)));
                    ctx.dispatch(PanelEvent::PantrySubmitFailed);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="host-form" on:submit=on_submit>
            <h3>"Host a Pantry"</h3>
            <label>
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Address"
                <input
                    type="text"
                    required
                    placeholder="Street, city, state"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Type"
                <select
                    prop:value=move || kind.get().as_str()
                    on:change=move |ev| set_kind.set(PantryType::from_str(&event_target_value(&ev)))
                >
                    {PantryType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Hours"
                <input
                    type="text"
                    placeholder="Mon-Fri 9am-5pm"
                    prop:value=move || hours.get()
                    on:input=move |ev| set_hours.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Notes"
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Add Pantry" }}
            </button>
        </form>
    }
}
