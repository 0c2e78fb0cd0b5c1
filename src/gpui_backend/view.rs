use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window};
use gpui::{canvas, div, px};

use crate::geom::ScreenPoint;
use crate::ruler::Ruler;

use super::config::RulerViewConfig;
use super::frame::build_frame;
use super::paint::{paint_frame, to_hsla};
use super::state::{MouseInput, RulerUiState};

/// A GPUI view that renders a [`Ruler`] and drives its measuring gesture.
///
/// The left mouse button stands in for the touch pointer: pressing starts the
/// gesture, dragging moves the line, releasing ends it, and releasing outside
/// the view cancels it.
#[derive(Clone)]
pub struct GpuiRulerView {
    ruler: Arc<RwLock<Ruler>>,
    state: Arc<RwLock<RulerUiState>>,
    config: RulerViewConfig,
}

impl GpuiRulerView {
    /// Create a new GPUI ruler view.
    ///
    /// Uses the default [`RulerViewConfig`].
    pub fn new(ruler: Ruler) -> Self {
        Self::with_config(ruler, RulerViewConfig::default())
    }

    /// Create a new GPUI ruler view with a custom configuration.
    pub fn with_config(ruler: Ruler, config: RulerViewConfig) -> Self {
        Self {
            ruler: Arc::new(RwLock::new(ruler)),
            state: Arc::new(RwLock::new(RulerUiState::default())),
            config,
        }
    }

    /// Get a handle for reading or replacing the underlying ruler.
    pub fn ruler_handle(&self) -> RulerHandle {
        RulerHandle {
            ruler: Arc::clone(&self.ruler),
        }
    }

    fn dispatch(&self, input: MouseInput, position: Point<Pixels>, cx: &mut Context<Self>) {
        let event = self
            .state
            .read()
            .expect("ruler state lock")
            .touch_event(input, screen_point(position));
        let mut ruler = self.ruler.write().expect("ruler lock");
        ruler.handle_touch(&event);
        if ruler.take_redraw_request() {
            cx.notify();
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        self.dispatch(MouseInput::Press, ev.position, cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        self.dispatch(MouseInput::Move, ev.position, cx);
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        self.dispatch(MouseInput::Release, ev.position, cx);
    }

    fn on_mouse_up_out(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        self.dispatch(MouseInput::ReleaseOutside, ev.position, cx);
    }
}

impl Render for GpuiRulerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let ruler = Arc::clone(&self.ruler);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let (background, (min_width, min_height)) = {
            let ruler = ruler.read().expect("ruler lock");
            (
                ruler.style().background_color,
                ruler.measure(config.padding, 0.0, 0.0),
            )
        };

        div()
            .size_full()
            .min_w(px(min_width))
            .min_h(px(min_height))
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let ruler = ruler.read().expect("ruler lock");
                        let mut state = state.write().expect("ruler state lock");
                        build_frame(&ruler, &mut state, &config, bounds, window)
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up_out(ev, cx);
                }),
            )
    }
}

/// A handle for accessing a [`Ruler`] held inside a `GpuiRulerView`.
///
/// The handle clones cheaply.
#[derive(Clone)]
pub struct RulerHandle {
    ruler: Arc<RwLock<Ruler>>,
}

impl RulerHandle {
    /// Read the ruler state.
    ///
    /// The ruler is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Ruler) -> R) -> R {
        let ruler = self.ruler.read().expect("ruler lock");
        f(&ruler)
    }

    /// Mutate the ruler state.
    ///
    /// The ruler is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Ruler) -> R) -> R {
        let mut ruler = self.ruler.write().expect("ruler lock");
        f(&mut ruler)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
