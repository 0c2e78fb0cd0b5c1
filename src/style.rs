//! Style and theming.

use crate::render::{Color, LineStyle, TextStyle};

/// Default ruler tick stroke width in pixels.
pub const DEFAULT_RULER_LINE_WIDTH: f32 = 8.0;
/// Default ruler label size in pixels.
pub const DEFAULT_RULER_TEXT_SIZE: f32 = 40.0;
/// Default ruler tick and label color.
pub const DEFAULT_RULER_LINE_COLOR: u32 = 0xFF03070A;
/// Default measuring line stroke width in pixels.
pub const DEFAULT_MEASURE_LINE_WIDTH: f32 = 8.0;
/// Default measurement readout size in pixels.
pub const DEFAULT_MEASURE_TEXT_SIZE: f32 = 80.0;
/// Default measurement readout color.
pub const DEFAULT_MEASURE_TEXT_COLOR: u32 = 0xFF03070A;

/// Host theme colors that some ruler defaults derive from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Primary color, the default measuring line color.
    pub primary: Color,
    /// Accent color, the default background.
    pub accent: Color,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a theme from packed `0xAARRGGBB` colors.
    pub fn from_argb(primary: u32, accent: u32) -> Self {
        Self {
            primary: Color::from_argb(primary),
            accent: Color::from_argb(accent),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_argb(0xFF3F51B5, 0xFFFF4081)
    }
}

/// Resolved visual parameters of a ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerStyle {
    /// Tick stroke width.
    pub ruler_line_width: f32,
    /// Inch label size.
    pub ruler_text_size: f32,
    /// Tick and inch label color.
    pub ruler_line_color: Color,
    /// Measuring line stroke width.
    pub measure_line_width: f32,
    /// Measuring line color.
    pub measure_line_color: Color,
    /// Readout text size.
    pub measure_text_size: f32,
    /// Readout text color.
    pub measure_text_color: Color,
    /// View background color.
    pub background_color: Color,
}

impl RulerStyle {
    /// Default style for the given theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            ruler_line_width: DEFAULT_RULER_LINE_WIDTH,
            ruler_text_size: DEFAULT_RULER_TEXT_SIZE,
            ruler_line_color: Color::from_argb(DEFAULT_RULER_LINE_COLOR),
            measure_line_width: DEFAULT_MEASURE_LINE_WIDTH,
            measure_line_color: theme.primary,
            measure_text_size: DEFAULT_MEASURE_TEXT_SIZE,
            measure_text_color: Color::from_argb(DEFAULT_MEASURE_TEXT_COLOR),
            background_color: theme.accent,
        }
    }

    /// Stroke used for the tick marks.
    pub fn ruler_line(&self) -> LineStyle {
        LineStyle {
            color: self.ruler_line_color,
            width: self.ruler_line_width,
        }
    }

    /// Text style used for the inch labels.
    pub fn ruler_text(&self) -> TextStyle {
        TextStyle {
            color: self.ruler_line_color,
            size: self.ruler_text_size,
        }
    }

    /// Stroke used for the measuring line.
    pub fn measure_line(&self) -> LineStyle {
        LineStyle {
            color: self.measure_line_color,
            width: self.measure_line_width,
        }
    }

    /// Text style used for the distance readout.
    pub fn measure_text(&self) -> TextStyle {
        TextStyle {
            color: self.measure_text_color,
            size: self.measure_text_size,
        }
    }
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themed_defaults_take_theme_colors() {
        let theme = Theme::from_argb(0xFF112233, 0xFF445566);
        let style = RulerStyle::themed(&theme);
        assert_eq!(style.measure_line_color.to_argb(), 0xFF112233);
        assert_eq!(style.background_color.to_argb(), 0xFF445566);
        assert_eq!(style.ruler_line_color.to_argb(), 0xFF03070A);
        assert_eq!(style.ruler_line_width, 8.0);
        assert_eq!(style.ruler_text_size, 40.0);
        assert_eq!(style.measure_text_size, 80.0);
    }

    #[test]
    fn ruler_labels_share_tick_color() {
        let style = RulerStyle::default();
        assert_eq!(style.ruler_text().color, style.ruler_line().color);
        assert_eq!(style.measure_line().width, 8.0);
    }
}
