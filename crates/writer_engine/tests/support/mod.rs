#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use writer_engine::{
    EventHandler, GeometryReporter, LiveWindow, Point, Rect, Size, SubscriptionId, ViewHost,
    WindowEvent,
};

/// Height the title bar adds on top of the content size.
pub const TITLE_BAR_HEIGHT: f64 = 28.0;

/// Behaves like a desktop window: programmatic changes post the same events as user ones.
pub struct FakeWindow {
    content: Cell<Size>,
    origin: Cell<Point>,
    handlers: RefCell<Vec<(SubscriptionId, WindowEvent, EventHandler)>>,
    next_id: Cell<u64>,
}

impl FakeWindow {
    pub fn new(content: Size, origin: Point) -> Rc<Self> {
        Rc::new(Self {
            content: Cell::new(content),
            origin: Cell::new(origin),
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        })
    }

    pub fn user_resize(&self, size: Size) {
        self.content.set(size);
        self.emit(WindowEvent::Resize);
    }

    pub fn end_live_resize(&self) {
        self.emit(WindowEvent::ResizeEnd);
    }

    pub fn user_move(&self, origin: Point) {
        self.origin.set(origin);
        self.emit(WindowEvent::Move);
    }

    pub fn content_size_for_test(&self) -> Size {
        self.content.get()
    }

    pub fn subscription_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    fn emit(&self, event: WindowEvent) {
        let handlers: Vec<EventHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == event)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

impl LiveWindow for FakeWindow {
    fn content_size(&self) -> Size {
        self.content.get()
    }

    fn frame(&self) -> Rect {
        let content = self.content.get();
        let origin = self.origin.get();
        Rect::new(
            origin.x,
            origin.y,
            content.width,
            content.height + TITLE_BAR_HEIGHT,
        )
    }

    fn set_content_size(&self, size: Size) {
        self.user_resize(size);
    }

    fn set_frame_origin(&self, origin: Point) {
        self.user_move(origin);
    }

    fn subscribe(&self, event: WindowEvent, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, event, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers.borrow_mut().retain(|(existing, _, _)| *existing != id);
    }
}

pub fn live(window: &Rc<FakeWindow>) -> Rc<dyn LiveWindow> {
    Rc::clone(window) as Rc<dyn LiveWindow>
}

/// A view that is mounted in a window only once the test says so.
#[derive(Default)]
pub struct FakeHost {
    window: RefCell<Option<Rc<dyn LiveWindow>>>,
}

impl FakeHost {
    pub fn mount(&self, window: Rc<dyn LiveWindow>) {
        *self.window.borrow_mut() = Some(window);
    }
}

impl ViewHost for FakeHost {
    fn window(&self) -> Option<Rc<dyn LiveWindow>> {
        self.window.borrow().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    Size(Size),
    Origin(Point),
}

#[derive(Default)]
pub struct RecordingReporter {
    reports: RefCell<Vec<Report>>,
}

impl RecordingReporter {
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.borrow_mut())
    }
}

impl GeometryReporter for RecordingReporter {
    fn size_changed(&self, size: Size) {
        self.reports.borrow_mut().push(Report::Size(size));
    }

    fn origin_changed(&self, origin: Point) {
        self.reports.borrow_mut().push(Report::Origin(origin));
    }
}
