//! Static sample data for the metric charts.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    area_chart::Record,
    metric_chart::{Granularity, SeriesKey},
};

/// A single period's measurements.
///
/// The period label is the x-axis category and is keyed by the axis key of
/// the point's granularity, e.g. `month` for monthly data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPoint {
    /// The granularity the point was bucketed with.
    pub granularity: Granularity,
    /// The day, week or month name.
    pub label: &'static str,
    /// The aggregate value for the period.
    pub value: u32,
    /// The number of new leads.
    pub leads: u32,
    /// The number of conversions.
    pub conversions: u32,
}

impl DataPoint {
    const fn new(
        granularity: Granularity,
        label: &'static str,
        value: u32,
        leads: u32,
        conversions: u32,
    ) -> Self {
        Self {
            granularity,
            label,
            value,
            leads,
            conversions,
        }
    }

    /// Get the measurement for `key`.
    pub fn get(&self, key: SeriesKey) -> u32 {
        match key {
            SeriesKey::Value => self.value,
            SeriesKey::Leads => self.leads,
            SeriesKey::Conversions => self.conversions,
        }
    }
}

impl Record for DataPoint {
    fn category(&self, key: &str) -> Option<String> {
        (key == self.granularity.axis_key()).then(|| self.label.to_owned())
    }

    fn measure(&self, key: &str) -> Option<f64> {
        key.parse::<SeriesKey>()
            .ok()
            .map(|series_key| f64::from(self.get(series_key)))
    }
}

impl Serialize for DataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(self.granularity.axis_key(), self.label)?;
        for key in SeriesKey::ALL {
            map.serialize_entry(key.as_str(), &self.get(key))?;
        }
        map.end()
    }
}

/// Sample data bound to one granularity.
pub type MetricDataset = &'static [DataPoint];

static MONTHLY: [DataPoint; 6] = [
    DataPoint::new(Granularity::Monthly, "Jan", 120, 40, 10),
    DataPoint::new(Granularity::Monthly, "Feb", 150, 50, 15),
    DataPoint::new(Granularity::Monthly, "Mar", 180, 55, 18),
    DataPoint::new(Granularity::Monthly, "Apr", 200, 65, 22),
    DataPoint::new(Granularity::Monthly, "May", 250, 80, 30),
    DataPoint::new(Granularity::Monthly, "Jun", 280, 85, 35),
];

static WEEKLY: [DataPoint; 6] = [
    DataPoint::new(Granularity::Weekly, "W1", 42, 12, 4),
    DataPoint::new(Granularity::Weekly, "W2", 48, 15, 5),
    DataPoint::new(Granularity::Weekly, "W3", 52, 18, 6),
    DataPoint::new(Granularity::Weekly, "W4", 60, 20, 7),
    DataPoint::new(Granularity::Weekly, "W5", 68, 22, 9),
    DataPoint::new(Granularity::Weekly, "W6", 75, 25, 11),
];

static DAILY: [DataPoint; 7] = [
    DataPoint::new(Granularity::Daily, "Mon", 10, 4, 1),
    DataPoint::new(Granularity::Daily, "Tue", 12, 5, 2),
    DataPoint::new(Granularity::Daily, "Wed", 15, 6, 2),
    DataPoint::new(Granularity::Daily, "Thu", 18, 7, 3),
    DataPoint::new(Granularity::Daily, "Fri", 20, 8, 3),
    DataPoint::new(Granularity::Daily, "Sat", 15, 5, 2),
    DataPoint::new(Granularity::Daily, "Sun", 8, 3, 1),
];

/// Get the sample dataset for `granularity`.
pub fn dataset(granularity: Granularity) -> MetricDataset {
    match granularity {
        Granularity::Daily => &DAILY,
        Granularity::Weekly => &WEEKLY,
        Granularity::Monthly => &MONTHLY,
    }
}
