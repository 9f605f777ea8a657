//! Right-hand preview: welcome placeholder or the rendered post card.

use leptos::prelude::*;

use crate::state::preview::{PreviewModel, Stage};

/// Preview region bound to the shared `PreviewModel` and `Stage`.
///
/// Text is written as text nodes, never as markup.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let preview = expect_context::<RwSignal<PreviewModel>>();
    let stage = expect_context::<RwSignal<Stage>>();

    view! {
        <section class="preview">
            <div id="welcome-state" class="preview__welcome" class:hidden=move || stage.get() != Stage::Welcome>
                <h2>"Your post will appear here"</h2>
                <p>"Fill in the brand and content details, then press Generate Post."</p>
            </div>
            <div id="result-stage" class="preview__result" class:hidden=move || stage.get() != Stage::Result>
                <article class="post-card">
                    <header class="post-card__header">
                        <div id="preview-avatar" class="post-card__avatar">{move || preview.with(|p| p.avatar.clone())}</div>
                        <span id="preview-brand-name" class="post-card__brand">{move || preview.with(|p| p.brand_name.clone())}</span>
                    </header>
                    <div
                        id="preview-image"
                        class="post-card__image"
                        class:hidden=move || preview.with(|p| p.image_src.is_none())
                    >
                        {move || {
                            preview
                                .with(|p| p.image_src.clone())
                                .map(|src| view! { <img src=src alt="Generated Content" class="post-image"/> })
                        }}
                    </div>
                    <h3 id="res-headline" class="post-card__headline">{move || preview.with(|p| p.headline.clone())}</h3>
                    <p id="res-caption" class="post-card__caption">{move || preview.with(|p| p.caption.clone())}</p>
                    <p id="res-cta" class="post-card__cta">{move || preview.with(|p| p.cta.clone())}</p>
                    <div id="res-hashtags" class="post-card__hashtags">
                        {move || {
                            preview.with(|p| {
                                p.hashtags
                                    .iter()
                                    .enumerate()
                                    .map(|(i, tag)| {
                                        let sep = if i == 0 { "" } else { " " };
                                        view! { {sep}<span>{tag.clone()}</span> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </article>
                <div class="design-prompt">
                    <h4>"Design Prompt"</h4>
                    <p id="res-design-prompt">{move || preview.with(|p| p.design_prompt.clone())}</p>
                </div>
            </div>
        </section>
    }
}
