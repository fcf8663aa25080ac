//! Window geometry primitives and off-screen clamping.

/// Smallest width and height worth persisting or restoring.
pub const MIN_PERSISTED_EXTENT: f64 = 300.0;

/// Used when the host reports no displays at all.
pub const FALLBACK_VISIBLE_FRAME: Rect = Rect {
    origin: Point { x: 0.0, y: 0.0 },
    size: Size {
        width: 1200.0,
        height: 800.0,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents reach `MIN_PERSISTED_EXTENT`.
    pub fn is_persistable(&self) -> bool {
        self.width >= MIN_PERSISTED_EXTENT && self.height >= MIN_PERSISTED_EXTENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Half-open: the max edges belong to the neighbouring display.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// Connected monitors as the host sees them right now.
pub trait DisplayLayout {
    /// Visible (menu bar and dock excluded) frame of every connected display.
    fn visible_frames(&self) -> Vec<Rect>;
    /// Visible frame of the main display, if the host designates one.
    fn main_visible_frame(&self) -> Option<Rect>;
}

/// Fixed display list, for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticDisplays {
    frames: Vec<Rect>,
    main: Option<usize>,
}

impl StaticDisplays {
    pub fn new(frames: Vec<Rect>) -> Self {
        Self { frames, main: None }
    }

    pub fn with_main(mut self, index: usize) -> Self {
        self.main = Some(index);
        self
    }
}

impl DisplayLayout for StaticDisplays {
    fn visible_frames(&self) -> Vec<Rect> {
        self.frames.clone()
    }

    fn main_visible_frame(&self) -> Option<Rect> {
        self.main.and_then(|index| self.frames.get(index).copied())
    }
}

/// Display containing `desired`, else main, else first, else the fallback frame.
pub fn target_visible_frame(desired: Point, displays: &dyn DisplayLayout) -> Rect {
    let frames = displays.visible_frames();
    frames
        .iter()
        .copied()
        .find(|frame| frame.contains(desired))
        .or_else(|| displays.main_visible_frame())
        .or_else(|| frames.first().copied())
        .unwrap_or(FALLBACK_VISIBLE_FRAME)
}

/// Moves `desired` so a frame of `frame_size` stays inside one visible display.
///
/// A frame larger than the display is pinned to the display's min edge.
pub fn clamp_origin(desired: Point, frame_size: Size, displays: &dyn DisplayLayout) -> Point {
    let target = target_visible_frame(desired, displays);
    Point {
        x: clamp_axis(desired.x, target.min_x(), target.max_x() - frame_size.width),
        y: clamp_axis(desired.y, target.min_y(), target.max_y() - frame_size.height),
    }
}

fn clamp_axis(value: f64, lower: f64, upper: f64) -> f64 {
    // Not f64::clamp: `upper < lower` is legal here and resolves to `lower`.
    value.min(upper).max(lower)
}
