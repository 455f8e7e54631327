//! Metric charts
//!
//! A metric chart is a card with a title, a trend badge, a daily/weekly/monthly
//! switch and an area chart of one measurement from the sample data. The
//! selected granularity decides which dataset is plotted and which record
//! field labels the x-axis.

mod change;
mod chart;
mod dataset;
mod granularity;
mod series;

pub use change::{ChangeIndicator, Trend};
pub use chart::{ChartTheme, MetricChart, MetricChartProps, ResolvedChart};
pub use dataset::{DataPoint, MetricDataset, dataset};
pub use granularity::{Granularity, ParseGranularityError};
pub use series::{ParseSeriesKeyError, SeriesKey, derive_config};
