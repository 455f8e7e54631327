//! The trend badge shown in the corner of a metric chart.

use std::fmt;

/// The direction of a [ChangeIndicator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// The change is zero or positive.
    Increase,
    /// The change is negative.
    Decrease,
}

impl Trend {
    /// The value of the `data-trend` attribute on the rendered badge.
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Increase => "increase",
            Trend::Decrease => "decrease",
        }
    }
}

/// A caller supplied, signed percentage change.
///
/// This is presentation only and is never computed from the plotted data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeIndicator(f64);

impl ChangeIndicator {
    /// The placeholder shown when the caller does not supply a change.
    pub const PLACEHOLDER: ChangeIndicator = ChangeIndicator(18.2);

    /// Create an indicator for a change of `percent` percent.
    pub const fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// The signed percentage.
    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn trend(self) -> Trend {
        if self.0 >= 0.0 {
            Trend::Increase
        } else {
            Trend::Decrease
        }
    }

    /// The unsigned size of the change.
    pub fn magnitude(self) -> f64 {
        self.0.abs()
    }
}

impl Default for ChangeIndicator {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Displays the magnitude as given, e.g. "5.3%" for -5.3.
impl fmt::Display for ChangeIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeIndicator, Trend};

    #[test]
    fn negative_change_is_a_decrease() {
        let change = ChangeIndicator::new(-5.3);

        assert_eq!(change.trend(), Trend::Decrease);
        assert_eq!(change.magnitude(), 5.3);
        assert_eq!(change.to_string(), "5.3%");
    }

    #[test]
    fn positive_change_is_an_increase() {
        let change = ChangeIndicator::new(23.5);

        assert_eq!(change.trend(), Trend::Increase);
        assert_eq!(change.to_string(), "23.5%");
    }

    #[test]
    fn zero_is_an_increase() {
        assert_eq!(ChangeIndicator::new(0.0).trend(), Trend::Increase);
    }

    #[test]
    fn whole_numbers_have_no_decimal_places() {
        assert_eq!(ChangeIndicator::new(12.0).to_string(), "12%");
    }

    #[test]
    fn default_is_placeholder() {
        assert_eq!(ChangeIndicator::default().percent(), 18.2);
    }
}
