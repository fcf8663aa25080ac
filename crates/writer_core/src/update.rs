use crate::{
    clamped_font_size, clamped_word_limit, count_words, parse_word_limit, AppState, Effect, Msg,
    DEFAULT_FONT_SIZE, DEFAULT_WORD_LIMIT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_word_count(count_words(&text));
            Vec::new()
        }
        Msg::LimitInputChanged(text) => {
            state.set_limit_text(text);
            Vec::new()
        }
        Msg::LimitSubmitted => commit_limit_text(&mut state),
        Msg::LimitFieldFocusChanged(focused) => {
            let was_focused = state.limit_field_focused();
            state.set_limit_field_focused(focused);
            // Clicking away applies the value just like Return.
            if was_focused && !focused {
                commit_limit_text(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::SettingsRestored {
            word_limit,
            font_size,
            focus_mode,
        } => {
            let limit = clamped_word_limit(word_limit);
            let size = clamped_font_size(font_size);
            state.set_word_limit(limit);
            state.set_font_size(size);
            state.set_focus_mode(focus_mode);

            // Write corrected values back so the store never holds out-of-range data.
            let mut effects = Vec::new();
            if i64::from(limit) != word_limit {
                effects.push(Effect::PersistWordLimit(limit));
            }
            if size != font_size {
                effects.push(Effect::PersistFontSize(size));
            }
            effects
        }
        Msg::IncreaseFontSize => {
            let size = state.preferences().font_size + 1.0;
            change_font_size(&mut state, size)
        }
        Msg::DecreaseFontSize => {
            let size = state.preferences().font_size - 1.0;
            change_font_size(&mut state, size)
        }
        Msg::ResetFontSize => change_font_size(&mut state, DEFAULT_FONT_SIZE),
        Msg::ResetDefaults => {
            state.set_font_size(DEFAULT_FONT_SIZE);
            state.set_word_limit(DEFAULT_WORD_LIMIT);
            vec![
                Effect::PersistFontSize(DEFAULT_FONT_SIZE),
                Effect::PersistWordLimit(DEFAULT_WORD_LIMIT),
            ]
        }
        Msg::ToggleFocusMode => {
            let enabled = !state.preferences().focus_mode;
            state.set_focus_mode(enabled);
            vec![Effect::PersistFocusMode(enabled)]
        }
        Msg::BottomBarHovered(hovered) => {
            state.set_bottom_bar_hovered(hovered);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn commit_limit_text(state: &mut AppState) -> Vec<Effect> {
    let current = state.preferences().word_limit;
    match parse_word_limit(state.limit_text()) {
        Some(limit) => {
            state.set_word_limit(limit);
            // Show the applied value even while the field keeps focus.
            state.set_limit_text(limit.to_string());
            if limit != current {
                vec![Effect::PersistWordLimit(limit)]
            } else {
                Vec::new()
            }
        }
        None => {
            state.set_limit_text(current.to_string());
            Vec::new()
        }
    }
}

fn change_font_size(state: &mut AppState, requested: f64) -> Vec<Effect> {
    let size = clamped_font_size(requested);
    if size == state.preferences().font_size {
        return Vec::new();
    }
    state.set_font_size(size);
    vec![Effect::PersistFontSize(size)]
}
