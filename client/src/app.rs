//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::generator::GeneratorPage;
use crate::state::{form::GeneratorForm, preview::PreviewModel, preview::Stage, submit::SubmitState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the form, submit and preview view-models as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(GeneratorForm::default()));
    provide_context(RwSignal::new(SubmitState::default()));
    provide_context(RwSignal::new(PreviewModel::default()));
    provide_context(RwSignal::new(Stage::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/content-engine.css"/>
        <Title text="AI Social Media Content Engine"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GeneratorPage/>
            </Routes>
        </Router>
    }
}
