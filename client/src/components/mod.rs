//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the login screen chrome and read/write shared state from
//! Leptos context providers installed by `app::App`.

pub mod backdrop_text;
pub mod settings_button;
pub mod settings_overlay;
