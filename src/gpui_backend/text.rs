//! Text measurement backed by the GPUI text system.
//!
//! Tick labels and the distance readout are placed from measured widths, so the
//! frame builder hands this measurer to [`Ruler::render`](crate::ruler::Ruler::render).

use gpui::{TextRun, Window, font, px};

use crate::ticks::TextMeasurer;

/// Measures text with the window's text system.
pub struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    /// Create a measurer bound to a window.
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let run = TextRun {
            len: text.len(),
            font: font(".SystemUIFont"),
            color: gpui::black(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let shaped =
            self.window
                .text_system()
                .shape_line(text.to_string().into(), px(size), &[run], None);
        let width = f32::from(shaped.width);
        let height = f32::from(shaped.ascent + shaped.descent);
        (width, height.max(size * 1.2))
    }
}
