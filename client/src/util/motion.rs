//! Entry animation schedule for the login screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every decorative layer plays one CSS keyframe animation on first render.
//! This module owns the timing table; components only attach the class and
//! inline style returned by [`Cue`]. Nothing here gates interaction: an
//! element whose animation never runs is still present and usable.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Decorative layers animated on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    BackgroundText,
    OverlayText,
    LoginCard,
    Heading,
    UsernameField,
    PasswordField,
    SettingsButton,
    SubmitButton,
    RedirectPreview,
}

/// Keyframe families defined in `style/login.css`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Translate up from below the viewport.
    RiseFromBelow,
    /// Translate down from above the viewport.
    DropFromAbove,
    /// Fade in while scaling up.
    PopIn,
    /// Fade in while sliding a short distance down.
    SettleDown,
    /// Fade in while sliding a short distance right.
    SlideRight,
    /// Fade in while sliding a short distance up.
    SlideUp,
    /// Plain opacity fade.
    Fade,
}

impl Motion {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::RiseFromBelow => "reveal reveal--rise",
            Self::DropFromAbove => "reveal reveal--drop",
            Self::PopIn => "reveal reveal--pop",
            Self::SettleDown => "reveal reveal--settle",
            Self::SlideRight => "reveal reveal--slide-right",
            Self::SlideUp => "reveal reveal--slide-up",
            Self::Fade => "reveal reveal--fade",
        }
    }
}

/// One scheduled appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cue {
    pub layer: Layer,
    pub motion: Motion,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Cue {
    /// Inline style carrying this cue's timing.
    #[must_use]
    pub fn style(&self) -> String {
        format!("animation-delay: {}ms; animation-duration: {}ms;", self.delay_ms, self.duration_ms)
    }
}

/// Mount-time schedule, ordered by start delay.
pub const ENTRY_SEQUENCE: &[Cue] = &[
    Cue { layer: Layer::BackgroundText, motion: Motion::RiseFromBelow, delay_ms: 0, duration_ms: 1200 },
    Cue { layer: Layer::OverlayText, motion: Motion::DropFromAbove, delay_ms: 500, duration_ms: 1000 },
    Cue { layer: Layer::LoginCard, motion: Motion::PopIn, delay_ms: 1000, duration_ms: 800 },
    Cue { layer: Layer::Heading, motion: Motion::SettleDown, delay_ms: 1300, duration_ms: 500 },
    Cue { layer: Layer::UsernameField, motion: Motion::SlideRight, delay_ms: 1400, duration_ms: 500 },
    Cue { layer: Layer::PasswordField, motion: Motion::SlideRight, delay_ms: 1500, duration_ms: 500 },
    Cue { layer: Layer::SettingsButton, motion: Motion::PopIn, delay_ms: 1500, duration_ms: 500 },
    Cue { layer: Layer::SubmitButton, motion: Motion::SlideUp, delay_ms: 1600, duration_ms: 500 },
    Cue { layer: Layer::RedirectPreview, motion: Motion::Fade, delay_ms: 1800, duration_ms: 500 },
];

/// Look up the cue for `layer`.
#[must_use]
pub fn cue(layer: Layer) -> Cue {
    ENTRY_SEQUENCE
        .iter()
        .copied()
        .find(|c| c.layer == layer)
        .unwrap_or(Cue { layer, motion: Motion::Fade, delay_ms: 0, duration_ms: 0 })
}

/// Class list for `layer`, with any extra classes appended.
#[must_use]
pub fn reveal_class(layer: Layer, extra: &str) -> String {
    let base = cue(layer).motion.class();
    if extra.is_empty() { base.to_owned() } else { format!("{extra} {base}") }
}

/// Inline timing style for `layer`.
#[must_use]
pub fn reveal_style(layer: Layer) -> String {
    cue(layer).style()
}
