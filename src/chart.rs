//! Chart Controller
//!
//! This module defines [`ChartController`], the single owner of the chart
//! state: the loaded dataset, the current [`AxisSelection`], the viewport
//! [`Geometry`] and the retained [`Scene`]. Every user interaction goes
//! through it and ends in a render pass that reconciles the scene.
//!
//! The controller never performs I/O itself. `initialize` hands out a
//! [`LoadTicket`]; the host loads the dataset however it likes and reports
//! back through [`ChartController::complete_load`].

use crate::config::ChartConfig;
use crate::data_types::{Axis, AxisSelection, Dataset, Field, Record};
use crate::geometry::{Geometry, Viewport};
use crate::scales::compute_scale;
use crate::scene::{set_active_label, PointTarget, Scene, SceneTarget, TooltipNode};
use crate::transform::PlotTransform;
use glam::Vec2;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Identifies one `initialize` call. Results for older tickets are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

pub struct ChartController {
    config: ChartConfig,
    geometry: Geometry,
    selection: AxisSelection,
    dataset: Option<Arc<Dataset>>,
    chart: Option<Scene>,
    generation: u64,
}

impl ChartController {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            selection: config.initial_selection,
            config,
            geometry: Geometry::default(),
            dataset: None,
            chart: None,
            generation: 0,
        }
    }

    /// Discards any rendered chart, lays out for `viewport` and starts a new load.
    pub fn initialize(&mut self, viewport: Viewport) -> LoadTicket {
        if self.chart.take().is_some() {
            debug!("removing previous chart");
        }
        self.dataset = None;
        self.selection = self.config.initial_selection;
        self.geometry = Geometry::from_viewport(
            viewport,
            self.config.width_fraction,
            self.config.height_fraction,
            self.config.margin,
        );
        self.generation += 1;
        info!(
            width = self.geometry.svg_width,
            height = self.geometry.svg_height,
            generation = self.generation,
            "initializing chart"
        );
        LoadTicket(self.generation)
    }

    /// Receives the outcome of the load started by `ticket`.
    ///
    /// Returns `true` when a chart was rendered. Failures are logged and leave
    /// the container empty.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: eyre::Result<Dataset>,
        now: Instant,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(ticket = ticket.0, current = self.generation, "dropping stale load");
            return false;
        }
        match result {
            Ok(dataset) => {
                self.dataset = Some(Arc::new(dataset));
                self.chart = Some(Scene::new(
                    &self.geometry,
                    self.config.radius,
                    self.config.tick_count,
                    self.config.transition(),
                ));
                self.render(now);
                true
            }
            Err(err) => {
                error!("failed to load census data: {err:?}");
                false
            }
        }
    }

    /// Brings the scene in line with the current selection.
    pub fn render(&mut self, now: Instant) {
        let (Some(dataset), Some(scene)) = (self.dataset.as_deref(), self.chart.as_mut()) else {
            debug!("render skipped, no chart");
            return;
        };
        let selection = self.selection;
        let transform = plot_transform(dataset, &self.geometry, selection);

        let points = dataset
            .iter()
            .map(|record| PointTarget {
                key: record.abbr.clone(),
                text: record.abbr.clone(),
                tooltip: tooltip_text(record, selection),
                position: transform.record_to_chart(record, selection.x(), selection.y()),
            })
            .collect();

        scene.reconcile(
            SceneTarget {
                x_scale: transform.x_scale,
                y_scale: transform.y_scale,
                points,
            },
            now,
        );
        set_active_label(scene.labels_mut(Axis::X), selection.x());
        set_active_label(scene.labels_mut(Axis::Y), selection.y());
    }

    /// Handles a click on an axis label. Returns `true` if the chart changed.
    pub fn on_label_click(&mut self, axis: Axis, field: Field, now: Instant) -> bool {
        if field.axis() != axis {
            warn!(?axis, %field, "label does not belong to this axis");
            return false;
        }
        if self.chart.is_none() || self.selection.get(axis) == field {
            return false;
        }
        self.selection.select(field);
        info!(?axis, %field, "axis selection changed");
        self.render(now);
        true
    }

    /// Rebuilds the chart for a new window size.
    pub fn on_resize(&mut self, viewport: Viewport) -> LoadTicket {
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.initialize(viewport)
    }

    /// Shows the tooltip of the circle under `pointer` (chart-group space),
    /// or hides it. Returns whether the tooltip changed.
    pub fn on_hover(&mut self, pointer: Option<Vec2>, now: Instant) -> bool {
        let Some(scene) = self.chart.as_mut() else {
            return false;
        };
        let [down, right] = self.config.tooltip_offset;
        let tooltip = pointer
            .and_then(|p| scene.hit_test(p, now))
            .map(|node| TooltipNode {
                key: node.key.clone(),
                text: node.tooltip.clone(),
                anchor: node.position_at(now) + Vec2::new(right, down - scene.radius),
            });
        scene.set_tooltip(tooltip)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.chart.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.chart.is_some()
    }

    /// Scales of the current selection, offset by the chart margins.
    pub fn transform(&self) -> Option<PlotTransform> {
        let dataset = self.dataset.as_deref()?;
        Some(plot_transform(dataset, &self.geometry, self.selection))
    }
}

fn plot_transform(dataset: &Dataset, geometry: &Geometry, selection: AxisSelection) -> PlotTransform {
    PlotTransform::new(
        compute_scale(dataset, selection.x(), geometry.x_range()),
        compute_scale(dataset, selection.y(), geometry.y_range()),
        Vec2::new(geometry.margin.left, geometry.margin.top),
    )
}

/// Hover text for one record: display name, then the chosen X and Y values.
pub fn tooltip_text(record: &Record, selection: AxisSelection) -> String {
    let (x, y) = (selection.x(), selection.y());
    format!(
        "{}\n{}: {}\n{}: {}",
        record.state,
        x.label(),
        record.value(x),
        y.label(),
        record.value(y)
    )
}
