use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_ruler::{
    DisplayMetrics, GpuiRulerView, Padding, Ruler, RulerViewConfig, StyleAttributes, Theme,
};

const ATTRIBUTES: &str = r##"{
    "rulerLineWidth": "2dp",
    "rulerLineTextSize": "14sp",
    "rulerLineColor": "#EEEEEE",
    "measureLineStrokeWidth": "3dp",
    "measureTextSize": "28sp",
    "measureTextColor": "#FFFFFF"
}"##;

fn main() {
    env_logger::init();

    let attributes = match StyleAttributes::from_json(ATTRIBUTES) {
        Ok(attributes) => attributes,
        Err(err) => {
            log::warn!("{err}; falling back to default ruler style");
            StyleAttributes::new()
        }
    };

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(420.0), px(820.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, move |_window, cx| {
            let ruler = Ruler::builder()
                .theme(Theme::from_argb(0xFFFFC107, 0xFF263238))
                .metrics(DisplayMetrics::with_ydpi(96.0).with_density(1.0))
                .attributes(attributes)
                .build();
            let config = RulerViewConfig {
                padding: Padding {
                    top: 8.0,
                    ..Padding::default()
                },
            };
            cx.new(|_| GpuiRulerView::with_config(ruler, config))
        })
        .unwrap();
    });
}
