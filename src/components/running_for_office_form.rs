//! Running For Office Form Component
//!
//! Candidate self-registration. After a successful submission the form is
//! replaced by a thank-you note pointing at ballot access rules.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{ballot_access_link, regions_for, CandidateForm, OfficeChoice, COUNTRIES};
use crate::store::{store_add_candidate, use_app_store};

fn fresh_form() -> CandidateForm {
    CandidateForm {
        show_on_map: true,
        ..CandidateForm::default()
    }
}

#[component]
pub fn RunningForOfficeForm() -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(fresh_form());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    // (country, state) of the last accepted submission
    let (submitted, set_submitted) = signal::<Option<(String, String)>>(None);

    let regions = move || form.with(|f| regions_for(&f.country));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(CandidateForm::to_submission) {
            Ok(draft) => draft,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::create_candidate(&draft).await {
                Ok(candidate) => {
                    web_sys::console::log_1(&format!("[RUN] Registered candidate {}", candidate.id).into());
                    store_add_candidate(&store, candidate);
                    set_submitted.set(Some((draft.country, draft.state)));
                    form.set(fresh_form());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[RUN] Submit failed: {}", e).into());
                    set_error.set(Some(format!("Could not register: {}", e)));
                }
            }
            set_submitting.set(false);
        });
    };

    let form_view = move || {
        view! {
            <form class="running-form" on:submit=on_submit>
                <h3>"Running for Office?"</h3>
                <label>
                    "Full name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Country"
                    <select
                        prop:value=move || form.with(|f| f.country.clone())
                        on:change=move |ev| form.update(|f| {
                            f.country = event_target_value(&ev);
                            f.state.clear();
                        })
                    >
                        <option value="">"Select a country"</option>
                        {COUNTRIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </select>
                </label>
                <label>
                    "State / Province"
                    <select
                        disabled=move || regions().is_empty()
                        prop:value=move || form.with(|f| f.state.clone())
                        on:change=move |ev| form.update(|f| f.state = event_target_value(&ev))
                    >
                        <option value="">"Select a region"</option>
                        {move || regions().iter().map(|r| view! { <option value=*r>{*r}</option> }).collect_view()}
                    </select>
                </label>
                <fieldset class="office-options">
                    <legend>"Office"</legend>
                    {OfficeChoice::ALL.into_iter().map(|office| view! {
                        <label class="office-option">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.offices.contains(&office))
                                on:change=move |ev| form.update(|f| f.set_office(office, event_target_checked(&ev)))
                            />
                            {office.label()}
                        </label>
                    }).collect_view()}
                </fieldset>
                <label>
                    "Website"
                    <input
                        type="url"
                        prop:value=move || form.with(|f| f.website.clone())
                        on:input=move |ev| form.update(|f| f.website = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>
                <label class="show-on-map">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.show_on_map)
                        on:change=move |ev| form.update(|f| f.show_on_map = event_target_checked(&ev))
                    />
                    "Show me on the map"
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Register" }}
                </button>
            </form>
        }
    };

    view! {
        <div class="running-for-office">
            {move || match submitted.get() {
                Some((country, state)) => view! {
                    <div class="thank-you">
                        <h3>"Thank you for registering!"</h3>
                        <p>"Check the ballot access requirements for your region:"</p>
                        <a href=ballot_access_link(&country, &state) target="_blank" rel="noopener noreferrer">
                            "Ballot access rules"
                        </a>
                        <button type="button" on:click=move |_| set_submitted.set(None)>
                            "Submit another"
                        </button>
                    </div>
                }.into_any(),
                None => form_view().into_any(),
            }}
        </div>
    }
}
