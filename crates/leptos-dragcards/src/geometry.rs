//! Drag Geometry
//!
//! Pure coordinate math shared by the mouse and touch input sources.

/// A gesture coordinate in viewport space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport-space bounding box (mirrors web_sys::DomRect)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn mid_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Midpoint rule: true when the pointer sits above the card's vertical
/// midpoint, i.e. the dragged card goes immediately before this one.
pub fn drop_before(pointer_y: f64, card: &Rect) -> bool {
    pointer_y < card.mid_y()
}

/// Nearest column by Euclidean distance from the gesture point to each
/// column's bounding-box center. Touch events carry coordinates rather than
/// an element under the pointer, so the column has to be resolved by hand.
pub fn nearest_column(point: Point, columns: &[Rect]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, rect) in columns.iter().enumerate() {
        let c = rect.center();
        let dx = point.x - c.x;
        let dy = point.y - c.y;
        let dist = dx * dx + dy * dy;
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((idx, dist)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Insertion slot for a vertical coordinate given the card rects of a column
/// with the dragged card already removed: the slot of the first card whose
/// midpoint lies below the pointer, or the tail.
pub fn slot_from_y(pointer_y: f64, cards: &[Rect]) -> usize {
    for (slot, rect) in cards.iter().enumerate() {
        if drop_before(pointer_y, rect) {
            return slot;
        }
    }
    cards.len()
}
