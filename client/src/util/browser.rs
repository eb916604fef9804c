//! Page-level browser side effects: full navigation and blocking alerts.
//!
//! Both calls are no-ops returning [`BrowserError::NoWindow`] outside the
//! `hydrate` build so SSR and unit tests never reach for `web_sys`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Failure performing a browser side effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("no browser window available")]
    NoWindow,
    #[error("navigation to `{url}` failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("alert failed: {0}")]
    Alert(String),
}

/// Replace the current document with `url` (full page load, not a route change).
///
/// # Errors
///
/// Returns [`BrowserError`] when there is no window or the browser rejects the
/// location.
pub fn navigate_to(url: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        window.location().set_href(url).map_err(|e| BrowserError::Navigation {
            url: url.to_owned(),
            reason: format!("{e:?}"),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(BrowserError::NoWindow)
    }
}

/// Show a modal `window.alert` and block until the user dismisses it.
///
/// # Errors
///
/// Returns [`BrowserError`] when there is no window or the dialog is suppressed.
pub fn alert(message: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        window.alert_with_message(message).map_err(|e| BrowserError::Alert(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(BrowserError::NoWindow)
    }
}
