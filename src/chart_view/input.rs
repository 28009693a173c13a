use super::ScatterView;
use crate::data_types::{Axis, Field};
use crate::utils::PointExt;
use glam::Vec2;
use gpui::*;
use std::time::Instant;

impl ScatterView {
    pub(super) fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let margin = self.controller.geometry().margin;
        let pointer = event.position.to_vec2() - Vec2::new(margin.left, margin.top);
        if self.controller.on_hover(Some(pointer), Instant::now()) {
            cx.notify();
        }
    }

    pub(super) fn handle_mouse_exit(&mut self, cx: &mut Context<Self>) {
        if self.controller.on_hover(None, Instant::now()) {
            cx.notify();
        }
    }

    pub(super) fn handle_label_click(&mut self, axis: Axis, field: Field, cx: &mut Context<Self>) {
        if self.controller.on_label_click(axis, field, Instant::now()) {
            cx.notify();
        }
    }
}
