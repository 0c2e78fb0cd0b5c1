//! Geometric primitives used by the ruler.
//!
//! All coordinates are in screen pixels, relative to the top-left corner of the
//! ruler view unless a backend states otherwise.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return a copy with the Y value replaced.
    pub const fn with_y(self, y: f32) -> Self {
        Self { x: self.x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub const fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Convert a point in the same space into rectangle-local coordinates.
    pub fn to_local(&self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x - self.min.x, point.y - self.min.y)
    }
}

/// Padding around the ruler content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Left padding.
    pub left: f32,
    /// Top padding.
    pub top: f32,
    /// Right padding.
    pub right: f32,
    /// Bottom padding.
    pub bottom: f32,
}

impl Padding {
    /// Combined left and right padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Combined top and bottom padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
