//! Redirect URL settings overlay with dimmed backdrop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits the draft URL held in `SettingsPanel`. Save commits through the
//! injected store; Cancel, backdrop clicks, and Escape discard the draft.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::settings::SettingsPanel;
use crate::util::storage::SharedStore;

/// Exit transition length; must match `.settings-overlay--leave` in the stylesheet.
const EXIT_TRANSITION: Duration = Duration::from_millis(200);

#[component]
pub fn SettingsOverlay() -> impl IntoView {
    let panel = expect_context::<RwSignal<SettingsPanel>>();
    let store = expect_context::<SharedStore>();

    let visible = Signal::derive(move || panel.with(|p| p.open));
    let url_input = NodeRef::<leptos::html::Input>::new();

    // Escape is handled on the panel, so focus must land inside it on open.
    let focus_request = Memo::new(move |_| panel.with(SettingsPanel::focus_request));
    Effect::new(move || {
        if focus_request.get().is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = url_input.get() {
                let _ = input_el.focus();
            }
        }
    });

    let on_cancel = Callback::new(move |()| panel.update(SettingsPanel::cancel));
    let on_save = Callback::new(move |()| {
        if let Some(Err(e)) = panel.try_update(|p| p.save(store.as_ref())) {
            log::warn!("redirect URL not persisted: {e}");
        }
    });
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    });

    view! {
        <AnimatedShow
            when=visible
            show_class="settings-overlay--enter"
            hide_class="settings-overlay--leave"
            hide_delay=EXIT_TRANSITION
        >
            <div class="settings-overlay">
                <div class="settings-overlay__backdrop" on:click=move |_| on_cancel.run(())></div>
                <div
                    class="settings-overlay__panel"
                    role="dialog"
                    aria-label="Settings"
                    tabindex="0"
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <h3 class="settings-overlay__title">"Settings"</h3>
                    <label class="login-label" for="redirect-url">"Redirect URL"</label>
                    <input
                        id="redirect-url"
                        node_ref=url_input
                        class="login-input settings-overlay__input"
                        type="url"
                        placeholder="https://example.com"
                        prop:value=move || panel.with(|p| p.draft_url.clone())
                        on:input=move |ev| panel.update(|p| p.edit_draft(event_target_value(&ev)))
                    />
                    <div class="settings-overlay__actions">
                        <button
                            class="login-button login-button--outline"
                            type="button"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button class="login-button" type="button" on:click=move |_| on_save.run(())>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </AnimatedShow>
    }
}
