//! Retained scene graph of everything the chart draws.
//!
//! The scene knows nothing about GPUI. The controller describes the wanted
//! state with a [`SceneTarget`] and [`Scene::reconcile`] moves the existing
//! nodes there, animating whatever already exists. A rendering layer only
//! has to sample the nodes at the current instant.

use crate::data_types::{Axis, Field};
use crate::geometry::Geometry;
use crate::scales::ChartScale;
use crate::transition::Tween;
use glam::Vec2;
use std::time::{Duration, Instant};

/// Vertical offsets of the three X labels below the axis.
const X_LABEL_OFFSETS: [f32; 3] = [15.0, 33.0, 50.0];
/// Distances of the three Y labels from the left margin edge.
const Y_LABEL_OFFSETS: [f32; 3] = [60.0, 40.0, 20.0];
const X_LABEL_GAP: f32 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    /// Pixel offset along the axis.
    pub offset: f32,
    pub label: String,
}

/// An axis line whose domain animates between scales.
#[derive(Clone, Debug)]
pub struct AxisNode {
    pub axis: Axis,
    domain: Tween<(f64, f64)>,
    range: (f32, f32),
    tick_count: usize,
}

impl AxisNode {
    pub fn new(axis: Axis, scale: &ChartScale, tick_count: usize, now: Instant) -> Self {
        Self {
            axis,
            domain: Tween::settled(scale.domain(), now),
            range: scale.range(),
            tick_count,
        }
    }

    pub fn transition_to(&mut self, scale: &ChartScale, now: Instant, duration: Duration) {
        self.range = scale.range();
        self.domain.retarget(scale.domain(), now, duration);
    }

    pub fn target_domain(&self) -> (f64, f64) {
        self.domain.target()
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn scale_at(&self, now: Instant) -> ChartScale {
        ChartScale::new_linear(self.domain.value_at(now), self.range)
    }

    pub fn ticks_at(&self, now: Instant) -> Vec<TickMark> {
        let scale = self.scale_at(now);
        scale
            .ticks(self.tick_count)
            .into_iter()
            .filter(|v| scale.contains(*v))
            .map(|value| TickMark {
                value,
                offset: scale.map(value),
                label: scale.format_tick(value),
            })
            .collect()
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.domain.is_running(now)
    }
}

/// One circle and the abbreviation drawn over it.
#[derive(Clone, Debug)]
pub struct PointNode {
    pub key: String,
    pub text: String,
    pub tooltip: String,
    position: Tween<Vec2>,
}

impl PointNode {
    pub fn position_at(&self, now: Instant) -> Vec2 {
        self.position.value_at(now)
    }

    pub fn target_position(&self) -> Vec2 {
        self.position.target()
    }

    /// Baseline anchor of the text label, a quarter radius below the centre.
    pub fn text_anchor_at(&self, now: Instant, radius: f32) -> Vec2 {
        self.position_at(now) + Vec2::new(0.0, radius / 4.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.position.is_running(now)
    }
}

/// A clickable axis title.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    pub field: Field,
    pub text: &'static str,
    /// Text anchor in chart-group space: horizontal labels sit just above
    /// it, rotated ones are centred on it.
    pub anchor: Vec2,
    /// Drawn rotated by -90 degrees (the Y group).
    pub rotated: bool,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipNode {
    pub key: String,
    pub text: String,
    /// Bottom-centre of the tooltip box.
    pub anchor: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointTarget {
    pub key: String,
    pub text: String,
    pub tooltip: String,
    pub position: Vec2,
}

/// Desired end state of one render pass.
#[derive(Clone)]
pub struct SceneTarget {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub points: Vec<PointTarget>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub radius: f32,
    tick_count: usize,
    duration: Duration,
    x_axis: Option<AxisNode>,
    y_axis: Option<AxisNode>,
    points: Vec<PointNode>,
    x_labels: Vec<LabelNode>,
    y_labels: Vec<LabelNode>,
    tooltip: Option<TooltipNode>,
}

impl Scene {
    pub fn new(geometry: &Geometry, radius: f32, tick_count: usize, duration: Duration) -> Self {
        Self {
            radius,
            tick_count,
            duration,
            x_axis: None,
            y_axis: None,
            points: Vec::new(),
            x_labels: axis_labels(geometry, Axis::X),
            y_labels: axis_labels(geometry, Axis::Y),
            tooltip: None,
        }
    }

    /// Moves the scene to `target`.
    ///
    /// Nodes that already exist animate from where they currently are.
    /// New nodes appear directly at their target, nodes absent from the
    /// target are dropped.
    pub fn reconcile(&mut self, target: SceneTarget, now: Instant) {
        let duration = self.duration;
        let tick_count = self.tick_count;

        match self.x_axis.as_mut() {
            Some(axis) => axis.transition_to(&target.x_scale, now, duration),
            None => self.x_axis = Some(AxisNode::new(Axis::X, &target.x_scale, tick_count, now)),
        }
        match self.y_axis.as_mut() {
            Some(axis) => axis.transition_to(&target.y_scale, now, duration),
            None => self.y_axis = Some(AxisNode::new(Axis::Y, &target.y_scale, tick_count, now)),
        }

        let mut previous = std::mem::take(&mut self.points);
        self.points = target
            .points
            .into_iter()
            .map(|t| {
                let position = match previous.iter().position(|p| p.key == t.key) {
                    Some(idx) => {
                        let mut tween = previous.swap_remove(idx).position;
                        tween.retarget(t.position, now, duration);
                        tween
                    }
                    None => Tween::settled(t.position, now),
                };
                PointNode {
                    key: t.key,
                    text: t.text,
                    tooltip: t.tooltip,
                    position,
                }
            })
            .collect();

        if let Some(tooltip) = self.tooltip.take() {
            self.tooltip = self.points.iter().find(|p| p.key == tooltip.key).map(|p| TooltipNode {
                key: p.key.clone(),
                text: p.tooltip.clone(),
                anchor: tooltip.anchor,
            });
        }
    }

    pub fn x_axis(&self) -> Option<&AxisNode> {
        self.x_axis.as_ref()
    }

    pub fn y_axis(&self) -> Option<&AxisNode> {
        self.y_axis.as_ref()
    }

    pub fn points(&self) -> &[PointNode] {
        &self.points
    }

    pub fn point(&self, key: &str) -> Option<&PointNode> {
        self.points.iter().find(|p| p.key == key)
    }

    pub fn labels(&self, axis: Axis) -> &[LabelNode] {
        match axis {
            Axis::X => &self.x_labels,
            Axis::Y => &self.y_labels,
        }
    }

    pub fn labels_mut(&mut self, axis: Axis) -> &mut [LabelNode] {
        match axis {
            Axis::X => &mut self.x_labels,
            Axis::Y => &mut self.y_labels,
        }
    }

    pub fn tooltip(&self) -> Option<&TooltipNode> {
        self.tooltip.as_ref()
    }

    /// Returns whether the tooltip changed.
    pub fn set_tooltip(&mut self, tooltip: Option<TooltipNode>) -> bool {
        if self.tooltip == tooltip {
            return false;
        }
        self.tooltip = tooltip;
        true
    }

    /// Top-most circle under `pointer` (chart-group space).
    pub fn hit_test(&self, pointer: Vec2, now: Instant) -> Option<&PointNode> {
        self.points
            .iter()
            .rev()
            .find(|p| p.position_at(now).distance(pointer) <= self.radius)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.x_axis.as_ref().is_some_and(|a| a.is_running(now))
            || self.y_axis.as_ref().is_some_and(|a| a.is_running(now))
            || self.points.iter().any(|p| p.is_running(now))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.x_axis.is_none() && self.y_axis.is_none()
    }

    /// Drops every drawn node, abandoning in-flight transitions.
    pub fn clear(&mut self) {
        self.x_axis = None;
        self.y_axis = None;
        self.points.clear();
        self.tooltip = None;
    }
}

/// Marks `active` as the only active label of `group`.
pub fn set_active_label(group: &mut [LabelNode], active: Field) {
    for label in group {
        label.active = label.field == active;
    }
}

fn axis_labels(geometry: &Geometry, axis: Axis) -> Vec<LabelNode> {
    Field::for_axis(axis)
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let anchor = match axis {
                Axis::X => Vec2::new(
                    geometry.chart_width / 2.0,
                    geometry.chart_height + X_LABEL_GAP + X_LABEL_OFFSETS[idx],
                ),
                // Rotating (x, y) by -90 degrees lands at (y, -x).
                Axis::Y => Vec2::new(
                    -geometry.margin.left + Y_LABEL_OFFSETS[idx],
                    geometry.chart_height / 2.0,
                ),
            };
            LabelNode {
                field: *field,
                text: field.label(),
                anchor,
                rotated: axis == Axis::Y,
                active: false,
            }
        })
        .collect()
}
