// Rendering of the scene graph with GPUI elements

use super::ScatterView;
use crate::data_types::Axis;
use crate::geometry::Geometry;
use crate::scene::{LabelNode, Scene, TickMark, TooltipNode};
use crate::theme::ChartTheme;
use glam::Vec2;
use gpui::*;
use std::time::Instant;

const TICK_SIZE: f32 = 6.0;
const TICK_LABEL_WIDTH: f32 = 48.0;
const X_LABEL_WIDTH: f32 = 320.0;
const ROTATED_LINE_HEIGHT: f32 = 14.0;
const TOOLTIP_WIDTH: f32 = 240.0;

/// Builds the whole chart surface: the chart group translated by the
/// margins, holding painted shapes and the text overlays.
pub fn render_chart(
    scene: &Scene,
    geometry: &Geometry,
    theme: &ChartTheme,
    now: Instant,
    cx: &mut Context<ScatterView>,
) -> Div {
    let x_ticks = scene.x_axis().map(|a| a.ticks_at(now)).unwrap_or_default();
    let y_ticks = scene.y_axis().map(|a| a.ticks_at(now)).unwrap_or_default();
    let circles: Vec<Vec2> = scene.points().iter().map(|p| p.position_at(now)).collect();

    let mut elements: Vec<AnyElement> = Vec::new();
    elements.push(shapes_canvas(
        geometry,
        theme,
        scene.radius,
        circles,
        x_ticks.iter().map(|t| t.offset).collect(),
        y_ticks.iter().map(|t| t.offset).collect(),
    ));
    elements.extend(tick_labels(&x_ticks, Axis::X, geometry, theme));
    elements.extend(tick_labels(&y_ticks, Axis::Y, geometry, theme));

    for point in scene.points() {
        let anchor = point.text_anchor_at(now, scene.radius);
        let size = theme.circle_text_size;
        elements.push(
            div()
                .absolute()
                .left(px(anchor.x - scene.radius))
                .top(px(anchor.y) - size)
                .w(px(scene.radius * 2.0))
                .text_align(TextAlign::Center)
                .text_size(size)
                .text_color(theme.circle_text)
                .font_weight(FontWeight::BOLD)
                .child(point.text.clone())
                .into_any_element(),
        );
    }

    for axis in [Axis::X, Axis::Y] {
        for label in scene.labels(axis) {
            elements.push(axis_label(label, axis, theme, cx));
        }
    }

    if let Some(tooltip) = scene.tooltip() {
        elements.push(tooltip_box(tooltip, geometry, theme));
    }

    let group = div()
        .absolute()
        .left(px(geometry.margin.left))
        .top(px(geometry.margin.top))
        .w(px(geometry.chart_width))
        .h(px(geometry.chart_height))
        .children(elements);

    div()
        .absolute()
        .left(px(0.0))
        .top(px(0.0))
        .w(px(geometry.svg_width))
        .h(px(geometry.svg_height))
        .child(group)
}

// Paints the axis lines, tick marks and the circles.
fn shapes_canvas(
    geometry: &Geometry,
    theme: &ChartTheme,
    radius: f32,
    circles: Vec<Vec2>,
    x_ticks: Vec<f32>,
    y_ticks: Vec<f32>,
) -> AnyElement {
    let chart_width = geometry.chart_width;
    let chart_height = geometry.chart_height;
    let axis_color = theme.axis_line;
    let circle_color = theme.circle_fill;

    canvas(
        |_, _, _| {},
        move |bounds, (), window, _cx| {
            let origin = bounds.origin;
            let at = |x: f32, y: f32| origin + point(px(x), px(y));

            let mut builder = PathBuilder::stroke(px(1.0));
            // Bottom axis at y = chart_height, left axis at x = 0.
            builder.move_to(at(0.0, chart_height));
            builder.line_to(at(chart_width, chart_height));
            builder.move_to(at(0.0, 0.0));
            builder.line_to(at(0.0, chart_height));
            for x in &x_ticks {
                builder.move_to(at(*x, chart_height));
                builder.line_to(at(*x, chart_height + TICK_SIZE));
            }
            for y in &y_ticks {
                builder.move_to(at(0.0, *y));
                builder.line_to(at(-TICK_SIZE, *y));
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, axis_color);
            }

            for center in &circles {
                let circle = Bounds::new(
                    at(center.x - radius, center.y - radius),
                    size(px(radius * 2.0), px(radius * 2.0)),
                );
                window.paint_quad(fill(circle, circle_color).corner_radii(Corners::all(px(radius))));
            }
        },
    )
    .absolute()
    .size_full()
    .into_any_element()
}

fn tick_labels(
    ticks: &[TickMark],
    axis: Axis,
    geometry: &Geometry,
    theme: &ChartTheme,
) -> Vec<AnyElement> {
    let size = theme.axis_label_size;
    ticks
        .iter()
        .map(|tick| {
            let label = div()
                .absolute()
                .w(px(TICK_LABEL_WIDTH))
                .text_size(size)
                .text_color(theme.axis_label)
                .child(tick.label.clone());
            match axis {
                Axis::X => label
                    .left(px(tick.offset - TICK_LABEL_WIDTH / 2.0))
                    .top(px(geometry.chart_height + TICK_SIZE + 2.0))
                    .text_align(TextAlign::Center),
                Axis::Y => label
                    .left(px(-TICK_SIZE - 4.0 - TICK_LABEL_WIDTH))
                    .top(px(tick.offset) - size / 2.0 - px(2.0))
                    .flex()
                    .justify_end(),
            }
            .into_any_element()
        })
        .collect()
}

/// A clickable axis title, bold while its field drives the axis.
fn axis_label(
    label: &LabelNode,
    axis: Axis,
    theme: &ChartTheme,
    cx: &mut Context<ScatterView>,
) -> AnyElement {
    let field = label.field;
    let (color, weight) = if label.active {
        (theme.label_active, FontWeight::BOLD)
    } else {
        (theme.label_inactive, FontWeight::NORMAL)
    };
    let size = theme.label_size;

    let element = div()
        .absolute()
        .text_size(size)
        .text_color(color)
        .font_weight(weight)
        .cursor_pointer()
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _: &MouseDownEvent, _window, cx| {
                this.handle_label_click(axis, field, cx);
            }),
        );

    if label.rotated {
        // GPUI text cannot be rotated; stack the glyphs instead.
        let glyphs: Vec<AnyElement> = label
            .text
            .chars()
            .map(|c| {
                div()
                    .h(px(ROTATED_LINE_HEIGHT))
                    .text_align(TextAlign::Center)
                    .child(c.to_string())
                    .into_any_element()
            })
            .collect();
        let height = glyphs.len() as f32 * ROTATED_LINE_HEIGHT;
        element
            .left(px(label.anchor.x - ROTATED_LINE_HEIGHT / 2.0))
            .top(px(label.anchor.y - height / 2.0))
            .w(px(ROTATED_LINE_HEIGHT))
            .flex()
            .flex_col()
            .children(glyphs)
            .into_any_element()
    } else {
        element
            .left(px(label.anchor.x - X_LABEL_WIDTH / 2.0))
            .top(px(label.anchor.y) - size)
            .w(px(X_LABEL_WIDTH))
            .text_align(TextAlign::Center)
            .child(label.text)
            .into_any_element()
    }
}

// Bottom-centre of the box sits on the anchor, whatever its height.
fn tooltip_box(tooltip: &TooltipNode, geometry: &Geometry, theme: &ChartTheme) -> AnyElement {
    div()
        .absolute()
        .left(px(tooltip.anchor.x - TOOLTIP_WIDTH / 2.0))
        .bottom(px(geometry.chart_height - tooltip.anchor.y))
        .w(px(TOOLTIP_WIDTH))
        .p_2()
        .rounded_md()
        .bg(theme.tooltip_background)
        .text_color(theme.tooltip_text)
        .text_size(px(12.0))
        .flex()
        .flex_col()
        .children(tooltip.text.lines().map(|line| div().child(line.to_string())))
        .into_any_element()
}
