//! gpui_ruler is a density-calibrated ruler overlay for GPUI.
//! It draws inch, half-inch and quarter-inch ticks and lets the user drag a
//! measuring line to read the distance from the top edge in inches.

#![forbid(unsafe_code)]

pub mod attributes;
pub mod calibration;
pub mod geom;
pub mod gesture;
pub mod gpui_backend;
pub mod layout;
pub mod render;
pub mod ruler;
pub mod style;
pub mod ticks;

pub use attributes::{AttrValue, AttributeError, StyleAttributes};
pub use calibration::{DimensionUnit, DisplayCalibration, DisplayMetrics};
pub use geom::{Padding, ScreenPoint, ScreenRect};
pub use gesture::{GestureState, TouchAction, TouchEvent};
pub use gpui_backend::{GpuiRulerView, GpuiTextMeasurer, RulerHandle, RulerViewConfig};
pub use layout::measure;
pub use render::{Color, LineSegment, LineStyle, RenderCommand, RenderList, TextStyle};
pub use ruler::{PLACEHOLDER_LABEL, Ruler, RulerBuilder};
pub use style::{RulerStyle, Theme};
pub use ticks::{TextMeasurer, TickLayout, TickRow};
