/// Side effects requested by `update`; the host writes them to the settings store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    PersistWordLimit(u32),
    PersistFontSize(f64),
    PersistFocusMode(bool),
}
