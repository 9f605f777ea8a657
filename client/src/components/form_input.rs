//! Labeled text input bound to one `GeneratorForm` field.

use leptos::prelude::*;

use crate::state::form::{GeneratorForm, TextField};

#[component]
pub fn FormInput(
    field: TextField,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let form = expect_context::<RwSignal<GeneratorForm>>();

    view! {
        <label class="form-field" for=field.dom_id()>
            <span class="form-field__label">{label}</span>
            <input
                id=field.dom_id()
                class="form-field__input"
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(|f| field.value(f).to_owned())
                on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
            />
        </label>
    }
}
