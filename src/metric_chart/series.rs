//! Series keys and the render config derived from them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::area_chart::{ChartConfig, SeriesStyle};

/// The numeric field of a [DataPoint](super::DataPoint) that a metric chart plots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKey {
    /// The aggregate value for the period.
    #[default]
    Value,
    /// The number of new leads.
    Leads,
    /// The number of leads converted to customers.
    Conversions,
}

impl SeriesKey {
    /// Every series key, in declaration order.
    pub const ALL: [SeriesKey; 3] = [Self::Value, Self::Leads, Self::Conversions];

    /// The field name as it appears in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Leads => "leads",
            Self::Conversions => "conversions",
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when a string does not name a [SeriesKey].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not one of value, leads or conversions")]
pub struct ParseSeriesKeyError(String);

impl FromStr for SeriesKey {
    type Err = ParseSeriesKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSeriesKeyError(s.to_owned()))
    }
}

/// Build the render config for a metric chart.
///
/// The config has exactly one entry, keyed by `series_key`, whose label is
/// the key with its first character upper-cased and whose colour is `color`.
pub fn derive_config(series_key: SeriesKey, color: &str) -> ChartConfig {
    let mut config = ChartConfig::new();
    config.insert(
        series_key.as_str().to_owned(),
        SeriesStyle {
            label: capitalize(series_key.as_str()),
            color: color.to_owned(),
        },
    );

    config
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
