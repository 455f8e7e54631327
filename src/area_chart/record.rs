use serde_json::Value;

/// A row of chart data that can be looked up by field name.
///
/// The renderer reads the x-axis category and the plotted value through this
/// trait and knows nothing else about the record.
pub trait Record {
    /// The category label stored under `key`, if any.
    fn category(&self, key: &str) -> Option<String>;

    /// The numeric value stored under `key`, if any.
    fn measure(&self, key: &str) -> Option<f64>;
}

/// JSON objects are records keyed by their field names.
impl Record for Value {
    fn category(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    fn measure(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }
}
