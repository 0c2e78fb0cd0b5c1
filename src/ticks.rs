//! Tick mark geometry.
//!
//! Each row of the ruler carries an inch, a half-inch and a quarter-inch tick,
//! all derived from the same row offset `(px_per_inch + padding_top) * i`.

use crate::geom::ScreenPoint;
use crate::render::{LineSegment, RenderList};
use crate::style::RulerStyle;

/// Length of the inch tick in pixels.
pub const INCH_TICK_LENGTH: f32 = 90.0;
/// Length of the half-inch tick in pixels.
pub const HALF_INCH_TICK_LENGTH: f32 = 45.0;
/// Length of the quarter-inch tick in pixels.
pub const QUARTER_INCH_TICK_LENGTH: f32 = 27.0;

/// Measures text for layout.
pub trait TextMeasurer {
    /// Return the `(width, height)` of `text` at font `size`, in pixels.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Tick positions for a single ruler row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    /// Row index, also the inch label.
    pub index: u32,
    /// Y of the inch tick.
    pub inch_y: f32,
    /// Y of the half-inch tick.
    pub half_inch_y: f32,
    /// Y of the quarter-inch tick.
    pub quarter_inch_y: f32,
}

impl TickRow {
    /// Inch tick segment.
    pub fn inch_segment(&self) -> LineSegment {
        LineSegment::horizontal(0.0, INCH_TICK_LENGTH, self.inch_y)
    }

    /// Half-inch tick segment.
    pub fn half_inch_segment(&self) -> LineSegment {
        LineSegment::horizontal(0.0, HALF_INCH_TICK_LENGTH, self.half_inch_y)
    }

    /// Quarter-inch tick segment.
    pub fn quarter_inch_segment(&self) -> LineSegment {
        LineSegment::horizontal(0.0, QUARTER_INCH_TICK_LENGTH, self.quarter_inch_y)
    }

    /// Text of the inch label.
    pub fn label(&self) -> String {
        self.index.to_string()
    }

    /// Baseline origin of the inch label, given the label's measured width.
    pub fn label_origin(&self, label_width: f32) -> ScreenPoint {
        ScreenPoint::new(
            INCH_TICK_LENGTH + label_width,
            self.inch_y + label_width / 2.0,
        )
    }
}

/// Row spacing of a ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLayout {
    step: f32,
}

impl TickLayout {
    /// Create a layout for the given density and top padding.
    ///
    /// The padding is part of the per-row step, so it accumulates with the row
    /// index rather than shifting the ruler once.
    pub fn new(px_per_inch_y: f32, padding_top: f32) -> Self {
        Self {
            step: px_per_inch_y + padding_top,
        }
    }

    /// Tick positions for row `index`.
    pub fn row(&self, index: u32) -> TickRow {
        let inch_y = self.step * index as f32;
        let half_inch_y = inch_y / 2.0;
        let quarter_inch_y = half_inch_y / 2.0;
        TickRow {
            index,
            inch_y,
            half_inch_y,
            quarter_inch_y,
        }
    }

    /// Rows whose quarter-inch tick does not exceed `view_height`.
    pub fn rows(&self, view_height: f32) -> TickRows {
        TickRows {
            layout: *self,
            view_height,
            next: 0,
            done: false,
        }
    }
}

/// Iterator over the rows drawn for a view height.
#[derive(Debug, Clone)]
pub struct TickRows {
    layout: TickLayout,
    view_height: f32,
    next: u32,
    done: bool,
}

impl Iterator for TickRows {
    type Item = TickRow;

    fn next(&mut self) -> Option<TickRow> {
        if self.done {
            return None;
        }
        let row = self.layout.row(self.next);
        if row.quarter_inch_y > self.view_height {
            self.done = true;
            return None;
        }
        // A step that never advances would repeat row zero forever.
        let step = self.layout.step;
        if !(step.is_finite() && step > 0.0) || self.next == u32::MAX {
            self.done = true;
        }
        self.next = self.next.saturating_add(1);
        Some(row)
    }
}

/// Push tick lines and inch labels for every visible row.
pub(crate) fn build_ticks(
    render: &mut RenderList,
    layout: &TickLayout,
    view_height: f32,
    style: &RulerStyle,
    measurer: &dyn TextMeasurer,
) {
    let line = style.ruler_line();
    let text = style.ruler_text();
    for row in layout.rows(view_height) {
        render.line(row.inch_segment(), line);
        render.line(row.half_inch_segment(), line);
        render.line(row.quarter_inch_segment(), line);

        let label = row.label();
        let (width, _) = measurer.measure(&label, text.size);
        render.text(row.label_origin(width), label, text);
    }
}
