use std::fmt;
use std::rc::{Rc, Weak};

use crate::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    /// Size changed, including every step of a live resize.
    Resize,
    /// The user released the resize handle.
    ResizeEnd,
    /// Frame origin changed.
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

pub type EventHandler = Rc<dyn Fn()>;

/// A host window. Events are delivered on the UI thread, in order.
pub trait LiveWindow {
    fn content_size(&self) -> Size;
    fn frame(&self) -> Rect;
    fn set_content_size(&self, size: Size);
    fn set_frame_origin(&self, origin: Point);
    fn subscribe(&self, event: WindowEvent, handler: EventHandler) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// The view that will eventually be mounted in a window.
pub trait ViewHost {
    fn window(&self) -> Option<Rc<dyn LiveWindow>>;
}

/// Owned event registration. Dropping it unsubscribes, if the window still exists.
pub struct Subscription {
    window: Weak<dyn LiveWindow>,
    id: SubscriptionId,
    event: WindowEvent,
}

impl Subscription {
    pub fn new(window: &Rc<dyn LiveWindow>, event: WindowEvent, handler: EventHandler) -> Self {
        let id = window.subscribe(event, handler);
        Self {
            window: Rc::downgrade(window),
            id,
            event,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn event(&self) -> WindowEvent {
        self.event
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(window) = self.window.upgrade() {
            window.unsubscribe(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event", &self.event)
            .field("window_alive", &(self.window.strong_count() > 0))
            .finish()
    }
}
