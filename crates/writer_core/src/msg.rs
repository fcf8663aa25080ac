#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document text changed (full snapshot).
    TextChanged(String),
    /// User edited the word-limit input field.
    LimitInputChanged(String),
    /// User pressed Return in the word-limit field.
    LimitSubmitted,
    /// Word-limit field gained or lost keyboard focus.
    LimitFieldFocusChanged(bool),
    /// Raw values read back from the settings store at launch.
    SettingsRestored {
        word_limit: i64,
        font_size: f64,
        focus_mode: bool,
    },
    IncreaseFontSize,
    DecreaseFontSize,
    ResetFontSize,
    /// Restore the default font size and word limit.
    ResetDefaults,
    ToggleFocusMode,
    /// Pointer entered or left the bottom status bar.
    BottomBarHovered(bool),
    /// Fallback for placeholder wiring.
    NoOp,
}
