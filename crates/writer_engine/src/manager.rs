//! Keeps a live window and the persisted geometry record in sync.
//!
//! The manager is `!Send`: it and every window it touches live on the UI
//! thread, and all retries run on that thread's `Scheduler`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use writer_logging::{writer_debug, writer_info, writer_trace};

use crate::{
    clamp_origin, DisplayLayout, EventHandler, LiveWindow, Point, Scheduler, Size, Subscription,
    ViewHost, WindowEvent,
};

/// Receives geometry reports; typically writes them to the settings store.
pub trait GeometryReporter {
    fn size_changed(&self, size: Size);
    fn origin_changed(&self, origin: Point);
}

/// Geometry to apply when the window first appears.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RestorePlan {
    pub size: Option<Size>,
    pub origin: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
    Unattached,
    Attached,
}

pub struct WindowGeometryManager {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    plan: RestorePlan,
    did_apply_initial_size: bool,
    window: Option<Weak<dyn LiveWindow>>,
    subscriptions: Vec<Subscription>,
    reporter: Rc<dyn GeometryReporter>,
    displays: Rc<dyn DisplayLayout>,
    readiness_checks: u64,
}

impl Inner {
    fn is_attached_to(&self, window: &Rc<dyn LiveWindow>) -> bool {
        self.window.as_ref().is_some_and(|current| {
            current.strong_count() > 0 && std::ptr::addr_eq(current.as_ptr(), Rc::as_ptr(window))
        })
    }

    fn release_subscriptions(&mut self) {
        if !self.subscriptions.is_empty() {
            writer_debug!("Releasing {} window subscriptions", self.subscriptions.len());
        }
        self.subscriptions.clear();
    }
}

impl WindowGeometryManager {
    pub fn new(
        plan: RestorePlan,
        reporter: Rc<dyn GeometryReporter>,
        displays: Rc<dyn DisplayLayout>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                plan,
                did_apply_initial_size: false,
                window: None,
                subscriptions: Vec::new(),
                reporter,
                displays,
                readiness_checks: 0,
            })),
        }
    }

    /// `Attached` while holding a window that is still alive.
    pub fn state(&self) -> AttachState {
        let inner = self.inner.borrow();
        match &inner.window {
            Some(window) if window.strong_count() > 0 => AttachState::Attached,
            _ => AttachState::Unattached,
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().subscriptions.len()
    }

    /// Number of readiness checks run so far, including the successful one.
    pub fn readiness_checks(&self) -> u64 {
        self.inner.borrow().readiness_checks
    }

    /// Waits for `host` to be mounted in a window, then connects to it.
    ///
    /// The check runs as a deferred task and re-queues itself once per tick
    /// until the host has a window. The chain stops if the manager, the host
    /// or the scheduler is dropped first.
    pub fn attach(&self, host: &Rc<dyn ViewHost>, scheduler: &Rc<dyn Scheduler>) {
        schedule_readiness_check(
            Rc::downgrade(&self.inner),
            Rc::downgrade(host),
            Rc::downgrade(scheduler),
        );
    }

    /// Connects to `window` right away. A no-op for the window already held.
    pub fn connect(&self, window: &Rc<dyn LiveWindow>) {
        connect(&self.inner, window);
    }

    /// Drops every subscription and forgets the window.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.release_subscriptions();
        inner.window = None;
    }
}

impl fmt::Debug for WindowGeometryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("WindowGeometryManager")
            .field("plan", &inner.plan)
            .field("did_apply_initial_size", &inner.did_apply_initial_size)
            .field("subscriptions", &inner.subscriptions)
            .field("readiness_checks", &inner.readiness_checks)
            .finish_non_exhaustive()
    }
}

fn schedule_readiness_check(
    inner: Weak<RefCell<Inner>>,
    host: Weak<dyn ViewHost>,
    scheduler: Weak<dyn Scheduler>,
) {
    let Some(queue) = scheduler.upgrade() else {
        writer_debug!("Scheduler dropped; abandoning window readiness check");
        return;
    };
    queue.defer(Box::new(move || readiness_check(inner, host, scheduler)));
}

fn readiness_check(
    inner: Weak<RefCell<Inner>>,
    host: Weak<dyn ViewHost>,
    scheduler: Weak<dyn Scheduler>,
) {
    let (Some(manager), Some(view)) = (inner.upgrade(), host.upgrade()) else {
        writer_debug!("Geometry manager or view dropped before a window appeared");
        return;
    };
    manager.borrow_mut().readiness_checks += 1;

    match view.window() {
        Some(window) => connect(&manager, &window),
        None => {
            writer_trace!("View has no window yet; retrying next tick");
            drop(manager);
            schedule_readiness_check(inner, host, scheduler);
        }
    }
}

fn connect(inner: &Rc<RefCell<Inner>>, window: &Rc<dyn LiveWindow>) {
    let (reporter, displays, initial_size, initial_origin) = {
        let mut state = inner.borrow_mut();
        if state.is_attached_to(window) {
            writer_trace!("Already attached to this window");
            return;
        }

        // Old registrations go before new ones are installed.
        state.release_subscriptions();
        state.window = Some(Rc::downgrade(window));
        let subscriptions = install_subscriptions(window, &state.reporter);
        state.subscriptions = subscriptions;

        let initial_size = if state.did_apply_initial_size {
            None
        } else {
            state.did_apply_initial_size = true;
            state.plan.size
        };
        (
            Rc::clone(&state.reporter),
            Rc::clone(&state.displays),
            initial_size,
            state.plan.origin,
        )
    };

    // The borrow is released: the window may dispatch events synchronously from here on.
    if let Some(size) = initial_size {
        writer_debug!("Restoring content size {}x{}", size.width, size.height);
        window.set_content_size(size);
    }

    if let Some(desired) = initial_origin {
        let frame_size = window.frame().size;
        let origin = clamp_origin(desired, frame_size, displays.as_ref());
        if origin != desired {
            writer_info!(
                "Restored origin ({}, {}) clamped to ({}, {})",
                desired.x,
                desired.y,
                origin.x,
                origin.y
            );
        }
        window.set_frame_origin(origin);
    }

    // Baseline, so the store is consistent even if no event ever fires.
    reporter.size_changed(window.content_size());
    reporter.origin_changed(window.frame().origin);
}

fn install_subscriptions(
    window: &Rc<dyn LiveWindow>,
    reporter: &Rc<dyn GeometryReporter>,
) -> Vec<Subscription> {
    [WindowEvent::Resize, WindowEvent::ResizeEnd, WindowEvent::Move]
        .into_iter()
        .map(|event| {
            let target = Rc::downgrade(window);
            let reporter = Rc::clone(reporter);
            let handler: EventHandler = Rc::new(move || {
                let Some(window) = target.upgrade() else {
                    return;
                };
                match event {
                    WindowEvent::Resize | WindowEvent::ResizeEnd => {
                        reporter.size_changed(window.content_size());
                    }
                    WindowEvent::Move => reporter.origin_changed(window.frame().origin),
                }
            });
            Subscription::new(window, event, handler)
        })
        .collect()
}
