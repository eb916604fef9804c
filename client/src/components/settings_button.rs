//! Floating gear button that opens the redirect settings overlay.

use leptos::prelude::*;

use crate::state::settings::SettingsPanel;
use crate::util::motion::{Layer, reveal_class, reveal_style};

#[component]
pub fn SettingsButton() -> impl IntoView {
    let panel = expect_context::<RwSignal<SettingsPanel>>();

    view! {
        <button
            class=reveal_class(Layer::SettingsButton, "settings-button")
            style=reveal_style(Layer::SettingsButton)
            type="button"
            title="Settings"
            aria-label="Settings"
            on:click=move |_| panel.update(SettingsPanel::open)
        >
            <svg
                class="settings-button__icon"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/>
                <circle cx="12" cy="12" r="3"/>
            </svg>
        </button>
    }
}
