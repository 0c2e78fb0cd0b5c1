use gpui::{Bounds, Pixels, Window};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::RenderList;
use crate::ruler::Ruler;

use super::config::RulerViewConfig;
use super::state::RulerUiState;
use super::text::GpuiTextMeasurer;

#[derive(Debug, Clone)]
pub(crate) struct RulerFrame {
    pub(crate) render: RenderList,
    /// Window-space bounds; render commands are relative to `bounds.min`.
    pub(crate) bounds: ScreenRect,
}

pub(crate) fn build_frame(
    ruler: &Ruler,
    state: &mut RulerUiState,
    config: &RulerViewConfig,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> RulerFrame {
    let origin_x = f32::from(bounds.origin.x);
    let origin_y = f32::from(bounds.origin.y);
    let width = f32::from(bounds.size.width);
    let height = f32::from(bounds.size.height);
    let rect = ScreenRect::new(
        ScreenPoint::new(origin_x, origin_y),
        ScreenPoint::new(origin_x + width, origin_y + height),
    );
    state.bounds = Some(rect);

    if !rect.is_valid() {
        log::debug!("skipping ruler frame for empty bounds {width}x{height}");
        return RulerFrame {
            render: RenderList::new(),
            bounds: rect,
        };
    }

    let measurer = GpuiTextMeasurer::new(window);
    let render = ruler.render(width, height, config.padding.top, &measurer);
    RulerFrame {
        render,
        bounds: rect,
    }
}
