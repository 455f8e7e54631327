//! A generic, stateless area chart.
//!
//! The chart is drawn in the browser by ECharts. This module builds the
//! ECharts option with `charming` and renders a container plus the script
//! that initialises the chart. It knows nothing about what the data means:
//! callers hand it records, the field to plot, the field to label the x-axis
//! with, and a [ChartConfig].

mod chart;
mod config;
mod record;

pub use chart::AreaChart;
pub use config::{ChartConfig, ChartHeight, GradientId, SeriesStyle, TickFormatter};
pub use record::Record;

/// The ECharts script that must be loaded before any chart is rendered.
pub const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";
