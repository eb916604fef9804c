//! Login form state and its submit state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting` on a guarded submit, then a single resolution once the
//! simulated delay elapses. No credentials are checked anywhere; the phase only
//! exists to disable the form and show the spinner while the delay runs.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

/// Simulated latency between submit and redirect.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Warning shown when submit resolves with no redirect URL configured.
pub const MISSING_REDIRECT_MESSAGE: &str = "Please set a redirect URL in settings first!";

/// Submit lifecycle of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// What the page must do once the submit delay has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Replace the document with this URL.
    Navigate(String),
    /// Warn the user; the form is interactive again.
    MissingRedirect,
}

/// Form fields and submit phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub phase: FormPhase,
}

impl LoginForm {
    /// Both fields hold at least one character.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control is disabled.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.is_submitting() || !self.has_credentials()
    }

    /// Enter `Submitting` if the guard allows it.
    ///
    /// Returns `false` (and changes nothing) when a field is empty or a submit
    /// is already pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.submit_disabled() {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Resolve a pending submit against the committed redirect URL.
    ///
    /// On the missing-URL path the form returns to `Idle`. On the navigate path
    /// it stays `Submitting`: the page is about to unload.
    pub fn finish_submit(&mut self, redirect_url: &str) -> SubmitOutcome {
        if redirect_url.is_empty() {
            self.phase = FormPhase::Idle;
            SubmitOutcome::MissingRedirect
        } else {
            SubmitOutcome::Navigate(redirect_url.to_owned())
        }
    }

    /// Drop a pending submit without resolving it.
    pub fn abandon_submit(&mut self) {
        self.phase = FormPhase::Idle;
    }
}
