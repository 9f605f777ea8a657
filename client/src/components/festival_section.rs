//! Festival details panel, shown only for the festival category.

use leptos::prelude::*;

use crate::components::form_input::FormInput;
use crate::state::form::{GeneratorForm, TextField, parse_cta_enabled};

#[component]
pub fn FestivalSection() -> impl IntoView {
    let form = expect_context::<RwSignal<GeneratorForm>>();

    view! {
        <fieldset
            id="festival-section"
            class="form-section"
            class:hidden=move || !form.with(GeneratorForm::festival_visible)
        >
            <legend>"Festival Details"</legend>
            <FormInput field=TextField::FestivalName label="Festival Name" placeholder="Diwali"/>
            <FormInput field=TextField::FestivalType label="Festival Type" placeholder="Religious"/>
            <label class="form-field" for="cta-enabled">
                <span class="form-field__label">"Include CTA"</span>
                <select
                    id="cta-enabled"
                    class="form-field__input"
                    on:change=move |ev| form.update(|f| f.cta_enabled = parse_cta_enabled(&event_target_value(&ev)))
                >
                    <option value="false" selected=move || !form.with(|f| f.cta_enabled)>"No"</option>
                    <option value="true" selected=move || form.with(|f| f.cta_enabled)>"Yes"</option>
                </select>
            </label>
        </fieldset>
    }
}
