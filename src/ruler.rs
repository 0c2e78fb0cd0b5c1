//! Ruler widget entry points and builders.

use crate::attributes::StyleAttributes;
use crate::calibration::{DisplayCalibration, DisplayMetrics};
use crate::geom::{Padding, ScreenPoint};
use crate::gesture::{GestureState, TouchEvent};
use crate::layout;
use crate::render::{LineSegment, RenderCommand, RenderList};
use crate::style::{RulerStyle, Theme};
use crate::ticks::{TextMeasurer, TickLayout, build_ticks};

/// Readout shown while no distance is being measured.
pub const PLACEHOLDER_LABEL: &str = "--- ---- inches";
/// Unit suffix of the distance readout.
pub const UNIT_SUFFIX: &str = "inches";

const READOUT_MARGIN: f32 = 20.0;

/// Ruler overlay with a draggable measuring line.
#[derive(Debug, Clone)]
pub struct Ruler {
    style: RulerStyle,
    calibration: DisplayCalibration,
    gesture: GestureState,
    redraw_requested: bool,
}

impl Ruler {
    /// Create a ruler with an explicit style and calibration.
    pub fn new(style: RulerStyle, calibration: DisplayCalibration) -> Self {
        Self {
            style,
            calibration,
            gesture: GestureState::idle(),
            redraw_requested: false,
        }
    }

    /// Start building a ruler with custom configuration.
    pub fn builder() -> RulerBuilder {
        RulerBuilder::default()
    }

    /// Access the resolved style.
    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    /// Access the display calibration.
    pub fn calibration(&self) -> DisplayCalibration {
        self.calibration
    }

    /// Access the current gesture state.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Apply a touch event.
    ///
    /// Every event is consumed and leaves a pending redraw request behind.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let next = self.gesture.apply(event);
        if next != self.gesture {
            log::trace!(
                "ruler gesture {:?}: measuring {} -> {}, point {:?}",
                event.action,
                self.gesture.is_measuring(),
                next.is_measuring(),
                next.point()
            );
        }
        self.gesture = next;
        self.redraw_requested = true;
        true
    }

    /// Take the pending redraw request, clearing it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Distance of the measuring line from the top edge in inches.
    ///
    /// Only available while a gesture is in progress with a positive offset.
    pub fn measured_inches(&self) -> Option<f32> {
        let y = self.gesture.active_y().filter(|y| *y > 0.0)?;
        Some(self.calibration.px_to_inches(y.abs()))
    }

    /// Readout text for the current gesture.
    pub fn measure_label(&self) -> String {
        match self.measured_inches() {
            Some(inches) => {
                // Ties round away from zero, so 0.0625 reads 0.063.
                let rounded = (f64::from(inches) * 1000.0).round() / 1000.0;
                format!("{rounded:.3} {UNIT_SUFFIX}")
            }
            None => PLACEHOLDER_LABEL.to_string(),
        }
    }

    /// Final view size for the given padding and constraints.
    pub fn measure(
        &self,
        padding: Padding,
        width_constraint: f32,
        height_constraint: f32,
    ) -> (f32, f32) {
        layout::measure(padding, width_constraint, height_constraint)
    }

    /// Build the draw commands for one frame, in view-local coordinates.
    pub fn render(
        &self,
        view_width: f32,
        view_height: f32,
        padding_top: f32,
        measurer: &dyn TextMeasurer,
    ) -> RenderList {
        let mut render = RenderList::new();
        render.push(RenderCommand::Fill {
            color: self.style.background_color,
        });

        let ticks = TickLayout::new(self.calibration.px_per_inch_y(), padding_top);
        build_ticks(&mut render, &ticks, view_height, &self.style, measurer);

        if let Some(y) = self.gesture.active_y() {
            render.line(
                LineSegment::horizontal(0.0, view_width, y),
                self.style.measure_line(),
            );
        }

        let label = self.measure_label();
        let text = self.style.measure_text();
        let (label_width, _) = measurer.measure(&label, text.size);
        let position = ScreenPoint::new(
            view_width - READOUT_MARGIN - label_width,
            padding_top + READOUT_MARGIN + text.size,
        );
        render.text(position, label, text);
        render
    }
}

impl Default for Ruler {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for configuring a ruler before construction.
#[derive(Debug, Default)]
pub struct RulerBuilder {
    theme: Theme,
    metrics: DisplayMetrics,
    attributes: StyleAttributes,
    style: Option<RulerStyle>,
}

impl RulerBuilder {
    /// Set the theme that supplies the color defaults.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the host display metrics.
    pub fn metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the styling attributes.
    pub fn attributes(mut self, attributes: StyleAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Use a fully resolved style, bypassing attributes and theme.
    pub fn style(mut self, style: RulerStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Build the ruler.
    pub fn build(self) -> Ruler {
        let style = self
            .style
            .unwrap_or_else(|| self.attributes.resolve(&self.theme, &self.metrics));
        Ruler::new(style, DisplayCalibration::from_metrics(&self.metrics))
    }
}
