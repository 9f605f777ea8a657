//! Generator page: brand + content form on the left, post preview on the right.
//!
//! ARCHITECTURE
//! ============
//! The category selector drives festival panel visibility through the form
//! view-model. Submitting spawns one request through `run_submission`, which
//! owns the busy state; the outcome either fills the preview and switches to
//! the result stage or is reported with a console log and a blocking alert.

use leptos::prelude::*;
use schema::ContentCategory;

use crate::components::festival_section::FestivalSection;
use crate::components::form_input::FormInput;
use crate::components::generate_button::GenerateButton;
use crate::components::preview_panel::PreviewPanel;
use crate::state::form::{GeneratorForm, TextField};
use crate::state::preview::{PreviewModel, Stage};
use crate::state::submit::SubmitState;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let form = expect_context::<RwSignal<GeneratorForm>>();
    let submit = expect_context::<RwSignal<SubmitState>>();
    let preview = expect_context::<RwSignal<PreviewModel>>();
    let stage = expect_context::<RwSignal<Stage>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.with(GeneratorForm::to_request);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::submit::{SubmitOutcome, run_submission};

            match run_submission(&submit, request, crate::net::api::generate_post).await {
                SubmitOutcome::Rendered(model) => {
                    preview.set(model);
                    stage.set(Stage::Result);
                }
                SubmitOutcome::Failed(err) => crate::util::browser::report_generation_failure(&err),
                SubmitOutcome::Ignored => log::debug!("submit ignored: generation already in flight"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, submit, preview, stage);
        }
    };

    let on_category_change = move |ev: leptos::ev::Event| {
        form.update(|f| f.select_category(&event_target_value(&ev)));
    };

    view! {
        <div class="generator-page">
            <form id="generator-form" class="generator-form" on:submit=on_submit>
                <fieldset class="form-section">
                    <legend>"Brand Profile"</legend>
                    <FormInput field=TextField::BrandName label="Brand Name" placeholder="Acme Bakery"/>
                    <FormInput field=TextField::Industry label="Industry"/>
                    <FormInput field=TextField::PrimaryService label="Primary Service"/>
                    <FormInput field=TextField::TargetAudience label="Target Audience"/>
                    <FormInput field=TextField::BrandTone label="Brand Tone" placeholder="Friendly, professional"/>
                    <FormInput field=TextField::BrandPhone label="Phone Number"/>
                    <FormInput field=TextField::Cta label="CTA Text" placeholder="Call us today"/>
                </fieldset>
                <fieldset class="form-section">
                    <legend>"Content Brief"</legend>
                    <FormInput field=TextField::Platform label="Platform" placeholder="Instagram"/>
                    <label class="form-field" for="content-category">
                        <span class="form-field__label">"Content Category"</span>
                        <select id="content-category" class="form-field__input" on:change=on_category_change>
                            {ContentCategory::ALL
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option
                                            value=category.label()
                                            selected=move || form.with(|f| f.category == category)
                                        >
                                            {category.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <FormInput field=TextField::Topic label="Topic / Goal"/>
                </fieldset>
                <FestivalSection/>
                <GenerateButton/>
            </form>
            <PreviewPanel/>
        </div>
    }
}
