pub const MIN_WORD_LIMIT: u32 = 1;
pub const MAX_WORD_LIMIT: u32 = 10_000;
pub const DEFAULT_WORD_LIMIT: u32 = 500;

pub const MIN_FONT_SIZE: f64 = 8.0;
pub const MAX_FONT_SIZE: f64 = 72.0;
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// User preferences that survive restarts. Values are always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub word_limit: u32,
    pub font_size: f64,
    pub focus_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            word_limit: DEFAULT_WORD_LIMIT,
            font_size: DEFAULT_FONT_SIZE,
            focus_mode: false,
        }
    }
}

/// Clamps any integer into `[MIN_WORD_LIMIT, MAX_WORD_LIMIT]`.
pub fn clamped_word_limit(value: i64) -> u32 {
    value.clamp(i64::from(MIN_WORD_LIMIT), i64::from(MAX_WORD_LIMIT)) as u32
}

/// Clamps a font size into `[MIN_FONT_SIZE, MAX_FONT_SIZE]`; NaN falls back to the default.
pub fn clamped_font_size(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_FONT_SIZE;
    }
    value.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Parses word-limit field input. `None` means the caller should revert the field.
pub fn parse_word_limit(input: &str) -> Option<u32> {
    input.trim().parse::<i64>().ok().map(clamped_word_limit)
}
