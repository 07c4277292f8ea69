//! Pantry Details Component

use leptos::prelude::*;

use crate::models::{FeedbackDraft, Pantry, Vouch, FEEDBACK_MAX_CHARS};

/// Read-only view of the pantry selected on the map, with a local
/// "Vouched for?" row. Feedback is not sent to the server.
#[component]
pub fn PantryDetails(pantry: Pantry) -> impl IntoView {
    let hours = (!pantry.hours.trim().is_empty()).then(|| pantry.hours.clone());
    let notes = (!pantry.notes.trim().is_empty()).then(|| pantry.notes.clone());
    let feedback = RwSignal::new(FeedbackDraft::new());

    let vote_class = move |vouch: Vouch| {
        if feedback.with(|f| f.vouch == Some(vouch)) {
            "vote-btn selected"
        } else {
            "vote-btn"
        }
    };

    view! {
        <div class="pantry-details">
            <h3>{pantry.name}</h3>
            <p class="pantry-type">{pantry.kind.label()}</p>
            <p class="pantry-address">{pantry.address}</p>
            <h4>"Hours of Operation"</h4>
            <p>{hours.unwrap_or_else(|| "Not listed".to_string())}</p>
            <h4>"Notes"</h4>
            <p>{notes.unwrap_or_else(|| "None".to_string())}</p>

            <div class="vouch-row">
                <span>"Vouched for?"</span>
                <button
                    type="button"
                    class=move || vote_class(Vouch::Up)
                    title="Yes"
                    on:click=move |_| feedback.update(|f| f.vote(Vouch::Up))
                >
                    "👍"
                </button>
                <button
                    type="button"
                    class=move || vote_class(Vouch::Down)
                    title="No"
                    on:click=move |_| feedback.update(|f| f.vote(Vouch::Down))
                >
                    "👎"
                </button>
            </div>
            <Show when=move || feedback.with(FeedbackDraft::shows_comment_box)>
                <div class="feedback-box">
                    <label for="pantry-comment">"Leave a comment? (optional)"</label>
                    <textarea
                        id="pantry-comment"
                        placeholder="Share your experience..."
                        maxlength=FEEDBACK_MAX_CHARS.to_string()
                        prop:value=move || feedback.with(|f| f.comment().to_string())
                        on:input=move |ev| feedback.update(|f| f.set_comment(&event_target_value(&ev)))
                    ></textarea>
                    <button type="button" on:click=move |_| feedback.update(FeedbackDraft::submit)>
                        "Submit Feedback"
                    </button>
                </div>
            </Show>
            <Show when=move || feedback.with(|f| f.submitted)>
                <p class="feedback-thanks">"Thanks for your feedback!"</p>
            </Show>
        </div>
    }
}
