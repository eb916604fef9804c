//! Redirect URL settings: committed value, draft, and panel visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! The committed URL is what submit navigates to. The draft is only what the
//! settings input shows; it reaches the committed value and storage through
//! [`SettingsPanel::save`] and nowhere else.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::storage::{KeyValueStore, REDIRECT_URL_KEY, StorageError};

/// Settings overlay state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    /// URL in effect for navigation. Empty when never configured.
    pub redirect_url: String,
    /// Uncommitted edit shown in the panel input.
    pub draft_url: String,
    /// Whether the overlay is visible.
    pub open: bool,
    /// Bumped on every open so the overlay can move keyboard focus into itself.
    pub focus_seq: u64,
}

impl SettingsPanel {
    /// Seed committed and draft values from storage.
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let redirect_url = store.read(REDIRECT_URL_KEY).unwrap_or_default();
        Self { draft_url: redirect_url.clone(), redirect_url, ..Self::default() }
    }

    /// Show the panel with the draft reset to the committed value.
    pub fn open(&mut self) {
        self.draft_url.clone_from(&self.redirect_url);
        self.open = true;
        self.focus_seq = self.focus_seq.wrapping_add(1);
    }

    /// Focus token while the panel is open; `None` while hidden.
    #[must_use]
    pub fn focus_request(&self) -> Option<u64> {
        self.open.then_some(self.focus_seq)
    }

    pub fn edit_draft(&mut self, value: String) {
        self.draft_url = value;
    }

    /// Hide the panel without committing the draft.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Commit the draft, persist it, and hide the panel.
    ///
    /// The committed value and panel state update even when the write fails,
    /// so the current page still redirects to what the user saved.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from the failed write.
    pub fn save(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        let written = store.write(REDIRECT_URL_KEY, &self.draft_url);
        self.redirect_url.clone_from(&self.draft_url);
        self.open = false;
        written
    }

    #[must_use]
    pub fn has_redirect(&self) -> bool {
        !self.redirect_url.is_empty()
    }

    /// Preview line shown under the form.
    #[must_use]
    pub fn preview_text(&self) -> Option<String> {
        self.has_redirect().then(|| format!("Redirecting to: {}", self.redirect_url))
    }
}
