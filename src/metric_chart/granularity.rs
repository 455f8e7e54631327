//! The time bucketing unit that selects a chart's dataset and axis labels.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the sample data for a metric chart is bucketed in time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One data point per day of the week.
    Daily,
    /// One data point per week.
    Weekly,
    /// One data point per month.
    #[default]
    Monthly,
}

impl Granularity {
    /// Every granularity in the order the selector displays them.
    pub const ALL: [Granularity; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// The lowercase name used in URLs and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// The text shown on the granularity switch.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// The record field that holds the x-axis category for this granularity.
    pub fn axis_key(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
        }
    }

    /// The caption displayed under the chart.
    ///
    /// These are fixed strings and are not derived from the length of the
    /// sample data, so they must be kept in sync with `dataset` by hand.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Daily => "Last 7 days",
            Self::Weekly => "Last 6 weeks",
            Self::Monthly => "Last 6 months",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when a string does not name a [Granularity].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not one of daily, weekly or monthly")]
pub struct ParseGranularityError(String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|granularity| granularity.as_str() == s)
            .ok_or_else(|| ParseGranularityError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::Granularity;

    #[test]
    fn default_is_monthly() {
        assert_eq!(Granularity::default(), Granularity::Monthly);
    }

    #[test]
    fn axis_keys() {
        assert_eq!(Granularity::Daily.axis_key(), "day");
        assert_eq!(Granularity::Weekly.axis_key(), "week");
        assert_eq!(Granularity::Monthly.axis_key(), "month");
    }

    #[test]
    fn captions() {
        assert_eq!(Granularity::Daily.caption(), "Last 7 days");
        assert_eq!(Granularity::Weekly.caption(), "Last 6 weeks");
        assert_eq!(Granularity::Monthly.caption(), "Last 6 months");
    }

    #[test]
    fn parses_lowercase_names() {
        for granularity in Granularity::ALL {
            assert_eq!(granularity.as_str().parse(), Ok(granularity));
        }

        assert!("hourly".parse::<Granularity>().is_err());
        assert!("Daily".parse::<Granularity>().is_err());
    }

    #[test]
    fn deserializes_from_lowercase_json() {
        let granularity: Granularity = serde_json::from_str("\"weekly\"").unwrap();

        assert_eq!(granularity, Granularity::Weekly);
    }
}
