//! census_chart: an interactive census scatter plot for GPUI

pub mod chart;
pub mod chart_view;
pub mod config;
pub mod data_types;
pub mod geometry;
pub mod polars_source;
pub mod scales;
pub mod scene;
pub mod theme;
pub mod transform;
pub mod transition;
pub mod utils;

pub use chart::{ChartController, LoadTicket};
pub use chart_view::ScatterView;
pub use config::ChartConfig;
pub use data_types::{Axis, AxisSelection, Dataset, Field, Record};
pub use geometry::{Geometry, Margin, Viewport};
pub use scales::{compute_scale, ChartScale};
