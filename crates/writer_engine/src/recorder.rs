use std::cell::RefCell;
use std::rc::Rc;

use writer_logging::writer_trace;

use crate::{keys, GeometryReporter, Point, RestorePlan, SettingValue, SettingsStore, Size};

/// Reads the geometry record left by the previous session.
///
/// A size below the minimum is ignored; an origin of exactly (0, 0) means
/// nothing was ever stored.
pub fn restore_plan(store: &dyn SettingsStore) -> RestorePlan {
    let size = Size::new(
        store.real(keys::LAST_WINDOW_WIDTH, 0.0),
        store.real(keys::LAST_WINDOW_HEIGHT, 0.0),
    );
    let origin = Point::new(
        store.real(keys::LAST_WINDOW_X, 0.0),
        store.real(keys::LAST_WINDOW_Y, 0.0),
    );

    RestorePlan {
        size: size.is_persistable().then_some(size),
        origin: (origin.x != 0.0 || origin.y != 0.0).then_some(origin),
    }
}

/// Geometry reporter that writes straight into a shared settings store.
#[derive(Debug)]
pub struct StoredGeometry<S> {
    store: Rc<RefCell<S>>,
}

impl<S: SettingsStore> StoredGeometry<S> {
    pub fn new(store: Rc<RefCell<S>>) -> Self {
        Self { store }
    }

    pub fn restore_plan(&self) -> RestorePlan {
        restore_plan(&*self.store.borrow())
    }
}

impl<S: SettingsStore> GeometryReporter for StoredGeometry<S> {
    fn size_changed(&self, size: Size) {
        if !size.is_persistable() {
            writer_trace!("Ignoring small window size {}x{}", size.width, size.height);
            return;
        }
        let mut store = self.store.borrow_mut();
        store.set(keys::LAST_WINDOW_WIDTH, SettingValue::Real(size.width));
        store.set(keys::LAST_WINDOW_HEIGHT, SettingValue::Real(size.height));
    }

    fn origin_changed(&self, origin: Point) {
        let mut store = self.store.borrow_mut();
        store.set(keys::LAST_WINDOW_X, SettingValue::Real(origin.x));
        store.set(keys::LAST_WINDOW_Y, SettingValue::Real(origin.y));
    }
}
