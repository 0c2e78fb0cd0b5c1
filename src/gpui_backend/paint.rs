use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineSegment, LineStyle, RenderCommand, TextStyle};

use super::frame::RulerFrame;

pub(crate) fn paint_frame(frame: &RulerFrame, window: &mut Window, cx: &mut App) {
    let origin = frame.bounds.min;
    for command in frame.render.commands() {
        match command {
            RenderCommand::Fill { color } => paint_fill(window, frame.bounds, *color),
            RenderCommand::Line { segment, style } => {
                paint_line(window, origin, *segment, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, offset(origin, *position), text, style);
            }
        }
    }
}

fn paint_fill(window: &mut Window, rect: ScreenRect, color: Color) {
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_line(window: &mut Window, origin: ScreenPoint, segment: LineSegment, style: LineStyle) {
    let width = style.width.max(0.5);
    let start = offset(origin, segment.start);
    let end = offset(origin, segment.end);
    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(point(px(start.x), px(start.y)));
    builder.line_to(point(px(end.x), px(end.y)));
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    baseline: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    // Render commands carry baseline origins; GPUI paints from the line top.
    let origin = point(px(baseline.x), px(baseline.y) - shaped.ascent);
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn offset(origin: ScreenPoint, point: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(origin.x + point.x, origin.y + point.y)
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_local_points_into_window_space() {
        let origin = ScreenPoint::new(10.0, 20.0);
        assert_eq!(
            offset(origin, ScreenPoint::new(5.0, 5.0)),
            ScreenPoint::new(15.0, 25.0)
        );
    }

    #[test]
    fn rgba_keeps_channels() {
        let rgba = to_rgba(Color::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0.1, 0.2, 0.3, 0.4));
    }
}
