//! Writer core: word counting, goal progress and the pure editor state machine.
mod effect;
mod msg;
mod preferences;
mod progress;
mod state;
mod update;
mod view_model;
mod word_count;

pub use effect::Effect;
pub use msg::Msg;
pub use preferences::{
    clamped_font_size, clamped_word_limit, parse_word_limit, Preferences, DEFAULT_FONT_SIZE,
    DEFAULT_WORD_LIMIT, MAX_FONT_SIZE, MAX_WORD_LIMIT, MIN_FONT_SIZE, MIN_WORD_LIMIT,
};
pub use progress::{hue_for_fraction, Progress, Tint, GREEN_HUE, ORANGE_HUE, YELLOW_HUE};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, FOCUS_DIMMED_OPACITY};
pub use word_count::{count_words, normalize_separators, DashAwareCounter, WordCounter};
