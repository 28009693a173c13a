//! Transform helper for coordinate projection

use crate::data_types::{Field, Record};
use crate::scales::ChartScale;
use glam::Vec2;

/// Projects records into chart-group space and converts between the
/// chart group and the outer surface.
#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    /// Top-left corner of the chart group inside the surface.
    pub origin: Vec2,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, origin: Vec2) -> Self {
        Self {
            x_scale,
            y_scale,
            origin,
        }
    }

    pub fn data_to_chart(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(self.x_scale.map(x), self.y_scale.map(y))
    }

    pub fn record_to_chart(&self, record: &Record, x_field: Field, y_field: Field) -> Vec2 {
        self.data_to_chart(record.value(x_field), record.value(y_field))
    }

    pub fn chart_to_surface(&self, point: Vec2) -> Vec2 {
        point + self.origin
    }

    pub fn surface_to_chart(&self, point: Vec2) -> Vec2 {
        point - self.origin
    }
}
