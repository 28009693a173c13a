use census_chart::data_types::{Axis, Field};
use census_chart::{ChartConfig, ScatterView};
use gpui::{
    point, px, size, Modifiers, MouseExitEvent, TestAppContext, VisualTestContext,
};
use std::path::PathBuf;

fn config_with(data: &str) -> ChartConfig {
    ChartConfig {
        data_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(data),
        ..ChartConfig::default()
    }
}

#[gpui::test]
fn test_view_loads_and_renders(cx: &mut TestAppContext) {
    let config = config_with("census_sample.csv");
    let window = cx.add_window(|window, cx| ScatterView::new(config, window, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            let controller = view.controller();
            assert!(controller.is_ready(), "dataset should be loaded");
            let scene = controller.scene().unwrap();
            assert_eq!(scene.points().len(), 3);
            assert!(scene.labels(Axis::X)[0].active);
        })
        .unwrap();
}

#[gpui::test]
fn test_view_with_missing_file_stays_empty(cx: &mut TestAppContext) {
    let config = config_with("does_not_exist.csv");
    let window = cx.add_window(|window, cx| ScatterView::new(config, window, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            assert!(!view.controller().is_ready());
            assert!(view.controller().scene().is_none());
        })
        .unwrap();
}

#[gpui::test]
fn test_view_resize_rebuilds_chart(cx: &mut TestAppContext) {
    let config = config_with("census_sample.csv");
    let window = cx.add_window(|window, cx| ScatterView::new(config, window, cx));
    cx.run_until_parked();

    window
        .update(cx, |view, _window, cx| {
            view.set_viewport(size(px(1600.0), px(1000.0)), cx);
            assert!(view.controller().scene().is_none(), "old chart removed at once");
        })
        .unwrap();
    cx.run_until_parked();

    window
        .update(cx, |view, _window, _cx| {
            let controller = view.controller();
            assert_eq!(controller.geometry().svg_height, 750.0);
            assert_eq!(controller.scene().unwrap().points().len(), 3);
            assert_eq!(controller.selection().x(), Field::Poverty);
        })
        .unwrap();
}

#[gpui::test]
fn test_pointer_over_circle_shows_tooltip(cx: &mut TestAppContext) {
    let config = config_with("census_sample.csv");
    let window = cx.add_window(|window, cx| ScatterView::new(config, window, cx));
    cx.run_until_parked();

    let view = window.root(cx).unwrap();
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    visual_cx.run_until_parked();

    let (margin, centre) = view.read_with(&visual_cx, |view, _| {
        let controller = view.controller();
        let centre = controller.scene().unwrap().point("AL").unwrap().target_position();
        (controller.geometry().margin, centre)
    });

    // Window coordinates are offset from the chart group by the margins.
    let over_circle = point(px(centre.x + margin.left), px(centre.y + margin.top));
    visual_cx.simulate_mouse_move(over_circle, None, Modifiers::default());
    visual_cx.run_until_parked();

    let tooltip = view.read_with(&visual_cx, |view, _| {
        view.controller().scene().unwrap().tooltip().cloned()
    });
    let tooltip = tooltip.expect("tooltip shown over AL");
    assert_eq!(tooltip.key, "AL");
    assert!(tooltip.text.starts_with("Alabama\n"));

    // Leaving the window straight from the circle hides it.
    visual_cx.simulate_event(MouseExitEvent {
        position: over_circle,
        pressed_button: None,
        modifiers: Modifiers::default(),
    });
    visual_cx.run_until_parked();

    view.read_with(&visual_cx, |view, _| {
        assert!(view.controller().scene().unwrap().tooltip().is_none());
    });
}

#[gpui::test]
fn test_clicking_axis_label_switches_field(cx: &mut TestAppContext) {
    let config = config_with("census_sample.csv");
    let window = cx.add_window(|window, cx| ScatterView::new(config, window, cx));
    cx.run_until_parked();

    let view = window.root(cx).unwrap();
    let mut visual_cx = VisualTestContext::from_window(window.into(), cx);
    visual_cx.run_until_parked();

    let (margin, anchor) = view.read_with(&visual_cx, |view, _| {
        let controller = view.controller();
        let age = controller.scene().unwrap().labels(Axis::X)[2].clone();
        assert_eq!(age.text, "Age (Median)");
        (controller.geometry().margin, age.anchor)
    });

    // Horizontal label text sits just above its anchor.
    let on_label = point(px(anchor.x + margin.left), px(anchor.y + margin.top - 5.0));
    visual_cx.simulate_click(on_label, Modifiers::default());
    visual_cx.run_until_parked();

    view.read_with(&visual_cx, |view, _| {
        let controller = view.controller();
        assert_eq!(controller.selection().x(), Field::Age);
        let active: Vec<_> = controller
            .scene()
            .unwrap()
            .labels(Axis::X)
            .iter()
            .map(|l| l.active)
            .collect();
        assert_eq!(active, vec![false, false, true]);
    });
}
