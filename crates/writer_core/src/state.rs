use crate::view_model::AppViewModel;
use crate::{Preferences, Progress};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    word_count: usize,
    prefs: Preferences,
    limit_text: String,
    limit_field_focused: bool,
    bottom_bar_hovered: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let prefs = Preferences::default();
        Self {
            word_count: 0,
            limit_text: prefs.word_limit.to_string(),
            prefs,
            limit_field_focused: false,
            bottom_bar_hovered: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::new(
            self.word_count,
            &self.prefs,
            self.limit_text.clone(),
            self.bottom_bar_hovered,
            self.dirty,
        )
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn progress(&self) -> Progress {
        Progress::evaluate(self.word_count, self.prefs.word_limit)
    }

    pub fn limit_text(&self) -> &str {
        &self.limit_text
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_word_count(&mut self, count: usize) {
        if self.word_count != count {
            self.word_count = count;
            self.dirty = true;
        }
    }

    pub(crate) fn set_limit_text(&mut self, text: String) {
        if self.limit_text != text {
            self.limit_text = text;
            self.dirty = true;
        }
    }

    pub(crate) fn limit_field_focused(&self) -> bool {
        self.limit_field_focused
    }

    pub(crate) fn set_limit_field_focused(&mut self, focused: bool) {
        self.limit_field_focused = focused;
    }

    /// Stores an already-clamped limit. The field text follows unless the user is editing it.
    pub(crate) fn set_word_limit(&mut self, limit: u32) {
        if self.prefs.word_limit != limit {
            self.prefs.word_limit = limit;
            self.dirty = true;
        }
        if !self.limit_field_focused {
            self.set_limit_text(limit.to_string());
        }
    }

    pub(crate) fn set_font_size(&mut self, size: f64) {
        if self.prefs.font_size != size {
            self.prefs.font_size = size;
            self.dirty = true;
        }
    }

    pub(crate) fn set_focus_mode(&mut self, enabled: bool) {
        if self.prefs.focus_mode != enabled {
            self.prefs.focus_mode = enabled;
            self.dirty = true;
        }
    }

    pub(crate) fn set_bottom_bar_hovered(&mut self, hovered: bool) {
        if self.bottom_bar_hovered != hovered {
            self.bottom_bar_hovered = hovered;
            self.dirty = true;
        }
    }
}
