use crate::{Preferences, Progress};

/// Bottom bar opacity in focus mode while the pointer is elsewhere.
pub const FOCUS_DIMMED_OPACITY: f64 = 0.15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub word_count: usize,
    pub word_limit: u32,
    pub limit_text: String,
    pub progress: Progress,
    pub font_size: f64,
    pub focus_mode: bool,
    pub bottom_bar_opacity: f64,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn new(
        word_count: usize,
        prefs: &Preferences,
        limit_text: String,
        bottom_bar_hovered: bool,
        dirty: bool,
    ) -> Self {
        let bottom_bar_opacity = if prefs.focus_mode && !bottom_bar_hovered {
            FOCUS_DIMMED_OPACITY
        } else {
            1.0
        };
        Self {
            word_count,
            word_limit: prefs.word_limit,
            limit_text,
            progress: Progress::evaluate(word_count, prefs.word_limit),
            font_size: prefs.font_size,
            focus_mode: prefs.focus_mode,
            bottom_bar_opacity,
            dirty,
        }
    }

    pub fn counter_label(&self) -> String {
        format!("Written Words: {}", self.word_count)
    }

    /// "Remaining: N" within the limit, "Over: N" past it.
    pub fn status_label(&self) -> String {
        if self.progress.is_over_limit {
            format!("Over: {}", self.progress.over_by)
        } else {
            format!("Remaining: {}", self.progress.remaining)
        }
    }
}
