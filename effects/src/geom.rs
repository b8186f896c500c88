#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in viewport space, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The same box moved so its top-left corner sits at `origin`.
    #[must_use]
    pub fn moved_to(&self, origin: Point) -> Self {
        Self { x: origin.x, y: origin.y, ..*self }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Visible viewport size (`innerWidth` / `innerHeight`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `rect` lies inside the viewport shrunk by `margin` on every side.
    #[must_use]
    pub fn contains_with_margin(&self, rect: &Rect, margin: f64) -> bool {
        rect.x >= margin
            && rect.y >= margin
            && rect.right() <= self.width - margin
            && rect.bottom() <= self.height - margin
    }
}
