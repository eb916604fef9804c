//! Login screen: decorative entry sequence, simulated sign-in, redirect settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! No credentials are verified. A guarded submit waits `SUBMIT_DELAY`, then
//! either replaces the page with the committed redirect URL or raises a
//! blocking warning and re-enables the form.
//!
//! TRADE-OFFS
//! ==========
//! The pending submit is held as a cancellable task and dropped on cleanup, so
//! a teardown mid-delay never fires a redirect from a disposed page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::backdrop_text::BackdropText;
use crate::components::settings_button::SettingsButton;
use crate::components::settings_overlay::SettingsOverlay;
use crate::state::login::{LoginForm, MISSING_REDIRECT_MESSAGE, SUBMIT_DELAY, SubmitOutcome};
use crate::state::settings::SettingsPanel;
use crate::util::browser;
use crate::util::deferred::Deferred;
use crate::util::motion::{Layer, reveal_class, reveal_style};
use crate::util::storage::SharedStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = expect_context::<RwSignal<LoginForm>>();
    let settings = expect_context::<RwSignal<SettingsPanel>>();
    let store = expect_context::<SharedStore>();

    // Storage is only reachable in the browser, so seed after hydration.
    Effect::new(move |_| {
        settings.set(SettingsPanel::load(store.as_ref()));
    });

    let pending = StoredValue::new_local(None::<Deferred>);
    on_cleanup(move || {
        if let Some(task) = pending.try_update_value(Option::take).flatten() {
            task.cancel();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(LoginForm::begin_submit).unwrap_or(false) {
            return;
        }
        let task = Deferred::schedule(SUBMIT_DELAY, move || resolve_submit(form, settings));
        pending.set_value(Some(task));
    };

    let submitting = move || form.with(LoginForm::is_submitting);
    let has_redirect = move || settings.with(SettingsPanel::has_redirect);

    view! {
        <div class="login-page">
            <BackdropText/>
            <SettingsButton/>

            <div class=reveal_class(Layer::LoginCard, "login-card-wrap") style=reveal_style(Layer::LoginCard)>
                <div class="login-card">
                    <h2
                        class=reveal_class(Layer::Heading, "login-card__title")
                        style=reveal_style(Layer::Heading)
                    >
                        "Welcome Back"
                    </h2>

                    <form class="login-form" on:submit=on_submit>
                        <div
                            class=reveal_class(Layer::UsernameField, "login-field")
                            style=reveal_style(Layer::UsernameField)
                        >
                            <label class="login-label" for="login-username">"Username"</label>
                            <input
                                id="login-username"
                                class="login-input"
                                type="text"
                                autocomplete="username"
                                placeholder="Enter your username"
                                prop:value=move || form.with(|f| f.username.clone())
                                on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                            />
                        </div>

                        <div
                            class=reveal_class(Layer::PasswordField, "login-field")
                            style=reveal_style(Layer::PasswordField)
                        >
                            <label class="login-label" for="login-password">"Password"</label>
                            <input
                                id="login-password"
                                class="login-input"
                                type="password"
                                autocomplete="current-password"
                                placeholder="Enter your password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </div>

                        <div
                            class=reveal_class(Layer::SubmitButton, "login-field")
                            style=reveal_style(Layer::SubmitButton)
                        >
                            <button
                                class="login-button login-button--wide"
                                type="submit"
                                disabled=move || form.with(LoginForm::submit_disabled)
                                aria-busy=move || submitting().to_string()
                            >
                                <Show when=submitting fallback=|| "Login">
                                    <span class="login-spinner" aria-hidden="true"></span>
                                </Show>
                            </button>
                        </div>
                    </form>

                    <Show when=has_redirect>
                        <p
                            class=reveal_class(Layer::RedirectPreview, "login-redirect-preview")
                            style=reveal_style(Layer::RedirectPreview)
                        >
                            {move || settings.with(SettingsPanel::preview_text).unwrap_or_default()}
                        </p>
                    </Show>
                </div>
            </div>

            <SettingsOverlay/>
        </div>
    }
}

/// Settle a pending submit once the simulated delay has elapsed.
fn resolve_submit(form: RwSignal<LoginForm>, settings: RwSignal<SettingsPanel>) {
    let Some(redirect_url) = settings.try_with_untracked(|s| s.redirect_url.clone()) else {
        return;
    };
    match form.try_update(|f| f.finish_submit(&redirect_url)) {
        Some(SubmitOutcome::Navigate(url)) => {
            log::info!("redirecting to {url}");
            if let Err(e) = browser::navigate_to(&url) {
                log::warn!("{e}");
                form.update(LoginForm::abandon_submit);
            }
        }
        Some(SubmitOutcome::MissingRedirect) => {
            if let Err(e) = browser::alert(MISSING_REDIRECT_MESSAGE) {
                log::warn!("{e}");
            }
        }
        None => {}
    }
}

