use std::sync::Once;

use pretty_assertions::assert_eq;
use writer_core::{
    update, AppState, Effect, Msg, DEFAULT_FONT_SIZE, DEFAULT_WORD_LIMIT, FOCUS_DIMMED_OPACITY,
    MAX_FONT_SIZE, MIN_FONT_SIZE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(writer_logging::initialize_for_tests);
}

fn edit_limit(state: AppState, text: &str) -> AppState {
    let (state, _) = update(state, Msg::LimitFieldFocusChanged(true));
    let (state, _) = update(state, Msg::LimitInputChanged(text.to_string()));
    state
}

#[test]
fn submitted_limit_is_clamped_and_persisted() {
    init_logging();
    let state = edit_limit(AppState::new(), "  20000 ");
    let (state, effects) = update(state, Msg::LimitSubmitted);

    assert_eq!(effects, vec![Effect::PersistWordLimit(10_000)]);
    assert_eq!(state.view().word_limit, 10_000);
    assert_eq!(state.view().limit_text, "10000");
}

#[test]
fn zero_limit_becomes_one() {
    init_logging();
    let state = edit_limit(AppState::new(), "0");
    let (state, effects) = update(state, Msg::LimitSubmitted);

    assert_eq!(effects, vec![Effect::PersistWordLimit(1)]);
    assert_eq!(state.preferences().word_limit, 1);
}

#[test]
fn invalid_limit_reverts_field() {
    init_logging();
    let state = edit_limit(AppState::new(), "lots");
    let (state, effects) = update(state, Msg::LimitSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.view().word_limit, DEFAULT_WORD_LIMIT);
    assert_eq!(state.view().limit_text, "500");
}

#[test]
fn losing_focus_applies_limit() {
    init_logging();
    let state = edit_limit(AppState::new(), "750");
    let (state, effects) = update(state, Msg::LimitFieldFocusChanged(false));

    assert_eq!(effects, vec![Effect::PersistWordLimit(750)]);
    assert_eq!(state.view().word_limit, 750);
}

#[test]
fn unchanged_limit_emits_nothing() {
    init_logging();
    let state = edit_limit(AppState::new(), " 500 ");
    let (state, effects) = update(state, Msg::LimitSubmitted);

    assert!(effects.is_empty());
    assert_eq!(state.limit_text(), "500");
}

#[test]
fn focus_gain_alone_does_not_commit() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LimitInputChanged("9".to_string()));
    let (state, effects) = update(state, Msg::LimitFieldFocusChanged(false));

    assert!(effects.is_empty());
    assert_eq!(state.limit_text(), "9");
}

#[test]
fn restored_settings_are_clamped_and_corrected() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::SettingsRestored {
            word_limit: 0,
            font_size: 200.0,
            focus_mode: true,
        },
    );
    let prefs = state.preferences();

    assert_eq!(prefs.word_limit, 1);
    assert_eq!(prefs.font_size, MAX_FONT_SIZE);
    assert!(prefs.focus_mode);
    assert_eq!(
        effects,
        vec![
            Effect::PersistWordLimit(1),
            Effect::PersistFontSize(MAX_FONT_SIZE)
        ]
    );
}

#[test]
fn in_range_settings_restore_silently() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::SettingsRestored {
            word_limit: 800,
            font_size: 20.0,
            focus_mode: false,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().limit_text, "800");
}

#[test]
fn font_size_steps_stop_at_bounds() {
    init_logging();
    let mut state = AppState::new();
    for _ in 0..100 {
        state = update(state, Msg::IncreaseFontSize).0;
    }
    assert_eq!(state.preferences().font_size, MAX_FONT_SIZE);
    let (state, effects) = update(state, Msg::IncreaseFontSize);
    assert!(effects.is_empty());

    let mut state = state;
    for _ in 0..100 {
        state = update(state, Msg::DecreaseFontSize).0;
    }
    assert_eq!(state.preferences().font_size, MIN_FONT_SIZE);

    let (state, effects) = update(state, Msg::ResetFontSize);
    assert_eq!(effects, vec![Effect::PersistFontSize(DEFAULT_FONT_SIZE)]);
    assert_eq!(state.preferences().font_size, DEFAULT_FONT_SIZE);
}

#[test]
fn reset_defaults_restores_font_and_limit() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::IncreaseFontSize);
    let state = edit_limit(state, "42");
    let (state, _) = update(state, Msg::LimitFieldFocusChanged(false));
    let (state, effects) = update(state, Msg::ResetDefaults);

    assert_eq!(
        effects,
        vec![
            Effect::PersistFontSize(DEFAULT_FONT_SIZE),
            Effect::PersistWordLimit(DEFAULT_WORD_LIMIT),
        ]
    );
    assert_eq!(state.view().word_limit, DEFAULT_WORD_LIMIT);
    assert_eq!(state.view().limit_text, "500");
}

#[test]
fn focus_mode_dims_bottom_bar_until_hovered() {
    init_logging();
    assert_eq!(AppState::new().view().bottom_bar_opacity, 1.0);

    let (state, effects) = update(AppState::new(), Msg::ToggleFocusMode);
    assert_eq!(effects, vec![Effect::PersistFocusMode(true)]);
    assert_eq!(state.view().bottom_bar_opacity, FOCUS_DIMMED_OPACITY);

    let (state, _) = update(state, Msg::BottomBarHovered(true));
    assert_eq!(state.view().bottom_bar_opacity, 1.0);

    let (state, effects) = update(state, Msg::ToggleFocusMode);
    assert_eq!(effects, vec![Effect::PersistFocusMode(false)]);
    assert!(!state.view().focus_mode);
}
