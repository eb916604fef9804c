//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s and provided through context, so the
//! transitions can be tested without a reactive runtime.

pub mod login;
pub mod settings;
