use super::*;

const ALL_LAYERS: [Layer; 9] = [
    Layer::BackgroundText,
    Layer::OverlayText,
    Layer::LoginCard,
    Layer::Heading,
    Layer::UsernameField,
    Layer::PasswordField,
    Layer::SettingsButton,
    Layer::SubmitButton,
    Layer::RedirectPreview,
];

#[test]
fn every_layer_has_exactly_one_cue() {
    for layer in ALL_LAYERS {
        let count = ENTRY_SEQUENCE.iter().filter(|c| c.layer == layer).count();
        assert_eq!(count, 1, "{layer:?}");
    }
    assert_eq!(ENTRY_SEQUENCE.len(), ALL_LAYERS.len());
}

#[test]
fn sequence_is_sorted_by_delay() {
    let delays: Vec<u32> = ENTRY_SEQUENCE.iter().map(|c| c.delay_ms).collect();
    let mut sorted = delays.clone();
    sorted.sort_unstable();
    assert_eq!(delays, sorted);
}

#[test]
fn background_text_starts_immediately() {
    let c = cue(Layer::BackgroundText);
    assert_eq!(c.delay_ms, 0);
    assert_eq!(c.duration_ms, 1200);
    assert_eq!(c.motion, Motion::RiseFromBelow);
}

#[test]
fn overlay_text_follows_background() {
    let c = cue(Layer::OverlayText);
    assert_eq!(c.delay_ms, 500);
    assert_eq!(c.motion, Motion::DropFromAbove);
}

#[test]
fn card_contents_stagger_after_card() {
    let card = cue(Layer::LoginCard).delay_ms;
    let order = [
        Layer::Heading,
        Layer::UsernameField,
        Layer::PasswordField,
        Layer::SubmitButton,
        Layer::RedirectPreview,
    ];
    let mut previous = card;
    for layer in order {
        let delay = cue(layer).delay_ms;
        assert!(delay > previous, "{layer:?} should start after {previous}ms");
        previous = delay;
    }
    assert_eq!(cue(Layer::RedirectPreview).delay_ms, 1800);
}

#[test]
fn settings_button_appears_after_card() {
    assert!(cue(Layer::SettingsButton).delay_ms > cue(Layer::LoginCard).delay_ms);
    assert_eq!(cue(Layer::SettingsButton).delay_ms, 1500);
}

#[test]
fn style_renders_delay_and_duration() {
    assert_eq!(reveal_style(Layer::OverlayText), "animation-delay: 500ms; animation-duration: 1000ms;");
}

#[test]
fn reveal_class_appends_motion_class() {
    assert_eq!(reveal_class(Layer::LoginCard, "login-card"), "login-card reveal reveal--pop");
    assert_eq!(reveal_class(Layer::RedirectPreview, ""), "reveal reveal--fade");
}
