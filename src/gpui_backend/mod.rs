//! GPUI integration for gpui_ruler.
//!
//! This module provides a GPUI view that renders a [`Ruler`](crate::ruler::Ruler)
//! and turns mouse input into the touch gestures that move its measuring line.

mod config;
mod frame;
mod paint;
mod state;
mod text;
mod view;

pub use config::RulerViewConfig;
pub use text::GpuiTextMeasurer;
pub use view::{GpuiRulerView, RulerHandle};
