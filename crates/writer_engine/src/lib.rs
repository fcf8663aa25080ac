//! Writer engine: host-side persistence and window geometry reconciliation.
mod geometry;
mod manager;
mod persist;
mod recorder;
mod scheduler;
mod store;
mod window;

pub use geometry::{
    clamp_origin, target_visible_frame, DisplayLayout, Point, Rect, Size, StaticDisplays,
    FALLBACK_VISIBLE_FRAME, MIN_PERSISTED_EXTENT,
};
pub use manager::{AttachState, GeometryReporter, RestorePlan, WindowGeometryManager};
pub use persist::{ensure_settings_dir, AtomicFileWriter, PersistError};
pub use recorder::{restore_plan, StoredGeometry};
pub use scheduler::{DeferredQueue, Scheduler, Task};
pub use store::{apply_effects, keys, settings_restored_msg, MemoryStore, SettingValue, SettingsStore};
pub use window::{EventHandler, LiveWindow, Subscription, SubscriptionId, ViewHost, WindowEvent};
