use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: Pixels,
    pub circle_fill: Hsla,
    pub circle_text: Hsla,
    pub circle_text_size: Pixels,
    pub label_active: Hsla,
    pub label_inactive: Hsla,
    pub label_size: Pixels,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: gpui::white(),
            axis_line: gpui::black(),
            axis_label: gpui::black().alpha(0.8),
            axis_label_size: px(11.0),
            // lightblue at .75 opacity
            circle_fill: Hsla::from(rgb(0xadd8e6)).alpha(0.75),
            circle_text: gpui::white(),
            circle_text_size: px(10.0),
            label_active: gpui::black(),
            label_inactive: gpui::black().alpha(0.35),
            label_size: px(14.0),
            tooltip_background: gpui::black().alpha(0.8),
            tooltip_text: gpui::white(),
        }
    }
}
