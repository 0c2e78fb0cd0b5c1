use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_ruler::{DisplayMetrics, GpuiRulerView, Ruler};

fn main() {
    env_logger::init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(480.0), px(900.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            // Desktop displays rarely report a physical DPI; 96 is the logical default.
            let ruler = Ruler::builder()
                .metrics(DisplayMetrics::with_ydpi(96.0))
                .build();
            cx.new(|_| GpuiRulerView::new(ruler))
        })
        .unwrap();
    });
}
