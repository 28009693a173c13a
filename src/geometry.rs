//! Viewport-derived layout.

use serde::{Deserialize, Serialize};

/// Size of the host window's drawable area, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Outer surface size, margins and the inner plotting area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub viewport: Viewport,
    pub svg_width: f32,
    pub svg_height: f32,
    pub margin: Margin,
    pub chart_width: f32,
    pub chart_height: f32,
}

impl Geometry {
    /// Lays the chart out over a fraction of the viewport.
    /// Inner dimensions never go negative on tiny windows.
    pub fn from_viewport(
        viewport: Viewport,
        width_fraction: f32,
        height_fraction: f32,
        margin: Margin,
    ) -> Self {
        let svg_width = (viewport.width * width_fraction).max(0.0);
        let svg_height = (viewport.height * height_fraction).max(0.0);
        Self {
            viewport,
            svg_width,
            svg_height,
            margin,
            chart_width: (svg_width - margin.left - margin.right).max(0.0),
            chart_height: (svg_height - margin.top - margin.bottom).max(0.0),
        }
    }

    /// Pixel range of the X axis, left to right.
    pub fn x_range(&self) -> (f32, f32) {
        (0.0, self.chart_width)
    }

    /// Pixel range of the Y axis; inverted so larger values plot higher.
    pub fn y_range(&self) -> (f32, f32) {
        (self.chart_height, 0.0)
    }
}
