use crate::data_types::AxisSelection;
use crate::geometry::Margin;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything tunable about the chart. Missing JSON keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    /// Share of the window width taken by the drawing surface.
    pub width_fraction: f32,
    /// Share of the window height taken by the drawing surface.
    pub height_fraction: f32,
    pub margin: Margin,
    pub transition_ms: u64,
    pub radius: f32,
    /// Tooltip displacement from the hovered circle, `[down, right]`.
    pub tooltip_offset: [f32; 2],
    pub tick_count: usize,
    pub initial_selection: AxisSelection,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("assets/data/data.csv"),
            width_fraction: 0.55,
            height_fraction: 0.75,
            margin: Margin::default(),
            transition_ms: 1000,
            radius: 20.0,
            tooltip_offset: [80.0, 50.0],
            tick_count: crate::scales::DEFAULT_TICK_COUNT,
            initial_selection: AxisSelection::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&json).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
