//! Rendering primitives.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how a ruler frame should be drawn.

use crate::geom::ScreenPoint;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0), channel(24))
    }

    /// Pack the color into a `0xAARRGGBB` value.
    pub fn to_argb(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.a) << 24) | (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub const fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Create a horizontal segment from `x0` to `x1` at height `y`.
    pub const fn horizontal(x0: f32, x1: f32, y: f32) -> Self {
        Self::new(ScreenPoint::new(x0, y), ScreenPoint::new(x1, y))
    }
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole view.
    Fill {
        /// Fill color.
        color: Color,
    },
    /// Draw one line segment.
    Line {
        /// Segment to draw.
        segment: LineSegment,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw text.
    Text {
        /// Baseline origin (left end of the baseline).
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Push a line segment.
    pub fn line(&mut self, segment: LineSegment, style: LineStyle) {
        self.push(RenderCommand::Line { segment, style });
    }

    /// Push a text run.
    pub fn text(&mut self, position: ScreenPoint, text: impl Into<String>, style: TextStyle) {
        self.push(RenderCommand::Text {
            position,
            text: text.into(),
            style,
        });
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
