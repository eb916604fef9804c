//! Oversized decorative wordmarks behind the login card.

use leptos::prelude::*;

use crate::util::motion::{Layer, reveal_class, reveal_style};

#[component]
pub fn BackdropText() -> impl IntoView {
    view! {
        <div
            class=reveal_class(Layer::BackgroundText, "backdrop-text")
            style=reveal_style(Layer::BackgroundText)
            aria-hidden="true"
        >
            <span class="backdrop-text__word backdrop-text__word--back">"Bluetrees"</span>
        </div>
        <div
            class=reveal_class(Layer::OverlayText, "backdrop-text")
            style=reveal_style(Layer::OverlayText)
            aria-hidden="true"
        >
            <span class="backdrop-text__word backdrop-text__word--front">"Overlay"</span>
        </div>
    }
}
