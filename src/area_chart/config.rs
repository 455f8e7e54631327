//! Rendering options for [AreaChart](super::AreaChart).

use std::{collections::BTreeMap, fmt};

use charming::element::JsFunction;

/// The display label and colour for one plotted series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesStyle {
    pub label: String,
    /// Any CSS colour string. It is passed through to the chart untouched.
    pub color: String,
}

/// Series styles keyed by the record field each series plots.
pub type ChartConfig = BTreeMap<String, SeriesStyle>;

/// An opaque token that disambiguates one rendered chart from another on
/// the same page.
///
/// The owner of a chart creates the token once and passes it to every render
/// of that chart. The chart's DOM element, and therefore the ECharts instance
/// and its fill gradient, are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradientId(String);

impl GradientId {
    /// Create a new random token.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// The id of the chart's container element.
    pub fn element_id(&self) -> String {
        format!("area-chart-{}", self.0)
    }
}

impl Default for GradientId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GradientId {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl fmt::Display for GradientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The height of a chart. The width always fills the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartHeight {
    /// A fixed height in CSS pixels.
    Pixels(u32),
    /// The full height of the containing element.
    Fill,
}

impl ChartHeight {
    /// The value for the CSS `height` property.
    pub fn css(self) -> String {
        match self {
            ChartHeight::Pixels(pixels) => format!("{pixels}px"),
            ChartHeight::Fill => "100%".to_owned(),
        }
    }
}

impl Default for ChartHeight {
    fn default() -> Self {
        ChartHeight::Pixels(300)
    }
}

/// Formats axis ticks and tooltip values in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormatter {
    /// The value as is.
    Plain,
    /// The value followed by a percent sign.
    Percent,
    /// The value as US dollars.
    Currency,
    /// Large values abbreviated, e.g. 1.2K.
    Compact,
}

impl TickFormatter {
    pub(super) fn to_js(self) -> JsFunction {
        let body = match self {
            TickFormatter::Plain => "return `${value}`;",
            TickFormatter::Percent => "return `${value}%`;",
            TickFormatter::Currency => {
                "const formatter = new Intl.NumberFormat('en-US', {
                    style: 'currency',
                    currency: 'USD'
                });
                return (typeof value === 'number') ? formatter.format(value) : `${value}`;"
            }
            TickFormatter::Compact => {
                "const formatter = new Intl.NumberFormat('en-US', { notation: 'compact' });
                return (typeof value === 'number') ? formatter.format(value) : `${value}`;"
            }
        };

        JsFunction::new_with_args("value", body)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartHeight, GradientId};

    #[test]
    fn gradient_ids_are_unique() {
        assert_ne!(GradientId::new(), GradientId::new());
    }

    #[test]
    fn gradient_id_names() {
        let id = GradientId::from("abc");

        assert_eq!(id.element_id(), "area-chart-abc");
    }

    #[test]
    fn height_css() {
        assert_eq!(ChartHeight::Pixels(180).css(), "180px");
        assert_eq!(ChartHeight::Fill.css(), "100%");
        assert_eq!(ChartHeight::default(), ChartHeight::Pixels(300));
    }
}
