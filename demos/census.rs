use census_chart::{ChartConfig, ScatterView};
use gpui::prelude::*;
use gpui::*;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => ChartConfig::default(),
    };

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1280.0), px(900.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        };
        let opened = cx.open_window(options, |window, cx| {
            cx.new(|cx| ScatterView::new(config, window, cx))
        });
        if let Err(err) = opened {
            error!("failed to open window: {err:?}");
            cx.quit();
        }
    });
    Ok(())
}
