//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::login::LoginPage;
use crate::state::{login::LoginForm, settings::SettingsPanel};
use crate::util::storage::default_store;

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
/// Provides the form, settings, and storage contexts used by the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(default_store());
    provide_context(RwSignal::new(LoginForm::default()));
    provide_context(RwSignal::new(SettingsPanel::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/bluetrees.css"/>
        <Title text="Bluetrees"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
            </Routes>
        </Router>
    }
}
