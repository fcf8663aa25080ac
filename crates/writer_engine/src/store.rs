use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use writer_core::{Effect, Msg, DEFAULT_FONT_SIZE, DEFAULT_WORD_LIMIT};

/// Setting names shared with earlier releases of the app; do not rename.
pub mod keys {
    pub const LAST_WINDOW_WIDTH: &str = "lastWindowWidth";
    pub const LAST_WINDOW_HEIGHT: &str = "lastWindowHeight";
    pub const LAST_WINDOW_X: &str = "lastWindowX";
    pub const LAST_WINDOW_Y: &str = "lastWindowY";
    pub const WORD_LIMIT: &str = "wordLimit";
    pub const EDITOR_FONT_SIZE: &str = "editorFontSize";
    pub const FOCUS_MODE: &str = "focusMode";
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Real(f64),
    Integer(i64),
    Flag(bool),
}

/// Durable key-value store for app-level settings.
///
/// Typed getters fall back to the given default when a key is missing or
/// holds a value of an unusable kind.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue>;
    fn set(&mut self, key: &str, value: SettingValue);

    fn real(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(SettingValue::Real(value)) => value,
            Some(SettingValue::Integer(value)) => value as f64,
            _ => default,
        }
    }

    fn integer(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(SettingValue::Integer(value)) => value,
            Some(SettingValue::Real(value)) if value.is_finite() => value.round() as i64,
            _ => default,
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(SettingValue::Flag(value)) => value,
            _ => default,
        }
    }
}

/// In-memory store; also the serialized shape of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    values: BTreeMap<String, SettingValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_owned(), value);
    }
}

/// Reads the persisted preferences as-is; the editor state machine clamps them.
pub fn settings_restored_msg(store: &dyn SettingsStore) -> Msg {
    Msg::SettingsRestored {
        word_limit: store.integer(keys::WORD_LIMIT, i64::from(DEFAULT_WORD_LIMIT)),
        font_size: store.real(keys::EDITOR_FONT_SIZE, DEFAULT_FONT_SIZE),
        focus_mode: store.flag(keys::FOCUS_MODE, false),
    }
}

pub fn apply_effects(store: &mut dyn SettingsStore, effects: &[Effect]) {
    for effect in effects {
        match *effect {
            Effect::PersistWordLimit(limit) => {
                store.set(keys::WORD_LIMIT, SettingValue::Integer(i64::from(limit)));
            }
            Effect::PersistFontSize(size) => {
                store.set(keys::EDITOR_FONT_SIZE, SettingValue::Real(size));
            }
            Effect::PersistFocusMode(enabled) => {
                store.set(keys::FOCUS_MODE, SettingValue::Flag(enabled));
            }
        }
    }
}
