//! Submit button with busy label and spinner.

use leptos::prelude::*;

use crate::state::submit::SubmitState;

/// Disabled with an in-progress label and visible spinner while a request is in flight.
#[component]
pub fn GenerateButton() -> impl IntoView {
    let submit = expect_context::<RwSignal<SubmitState>>();

    view! {
        <button
            id="generate-btn"
            class="btn btn--primary"
            type="submit"
            disabled=move || submit.with(SubmitState::is_busy)
        >
            <span class="btn-text">{move || submit.with(SubmitState::button_label)}</span>
            <span class="spinner" class:hidden=move || !submit.with(SubmitState::is_busy)></span>
        </button>
    }
}
