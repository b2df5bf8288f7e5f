use serde::{Deserialize, Serialize};

use crate::math;

/// Presentation and constraint hints attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub precision: Option<u32>,
    /// Show a proportional bar when both bounds are present.
    pub bar: bool,
    /// Display labels for enumerated numeric values.
    pub options: Option<Vec<String>>,
    /// The property is a trigger rather than a persistent value.
    pub event: bool,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_range(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_bar(mut self) -> Self {
        self.bar = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn as_event(mut self) -> Self {
        self.event = true;
        self
    }

    /// Return `(min, max)` when both bounds are defined.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub fn has_options(&self) -> bool {
        self.options.is_some()
    }

    /// Clamp against whichever bounds are defined.
    ///
    /// The lower bound is applied first, so an inverted range resolves to
    /// `max`.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }

    /// Position of `value` inside the bounds as a percentage.
    pub fn bar_percent(&self, value: f64) -> Option<f64> {
        if !self.bar || self.has_options() {
            return None;
        }
        let (min, max) = self.bounds()?;
        Some(math::scale_limit(value, min, max, 0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Schema;

    #[test]
    fn given_bounded_schema_when_clamping_then_result_stays_in_range() {
        let schema = Schema::new().with_range(-2.0, 5.0);
        for value in [-100.0, -2.0, 0.0, 4.99, 5.0, 7.5, f64::MAX] {
            let clamped = schema.clamp(value);
            assert!((-2.0..=5.0).contains(&clamped), "{value} -> {clamped}");
        }
    }

    #[test]
    fn given_only_min_when_clamping_then_upper_side_is_open() {
        let schema = Schema::new().with_min(0.0);
        assert_eq!(schema.clamp(-1.0), 0.0);
        assert_eq!(schema.clamp(1e9), 1e9);
    }

    #[test]
    fn given_bar_schema_when_value_inside_range_then_percent_is_proportional()
    {
        let schema = Schema::new().with_range(10.0, 20.0).with_bar();
        assert_eq!(schema.bar_percent(15.0), Some(50.0));
        assert_eq!(schema.bar_percent(30.0), Some(100.0));
    }

    #[test]
    fn given_schema_without_bar_flag_when_percent_requested_then_none() {
        let schema = Schema::new().with_range(0.0, 1.0);
        assert_eq!(schema.bar_percent(0.5), None);

        let options = Schema::new()
            .with_range(0.0, 1.0)
            .with_bar()
            .with_options(["a", "b"]);
        assert_eq!(options.bar_percent(0.5), None);
    }

    #[test]
    fn given_json_schema_when_deserialized_then_missing_fields_default() {
        let schema: Schema =
            serde_json::from_str(r#"{ "min": 0, "max": 4, "bar": true }"#)
                .expect("schema should parse");

        assert_eq!(schema.bounds(), Some((0.0, 4.0)));
        assert!(schema.bar);
        assert_eq!(schema.step, None);
        assert!(!schema.event);
    }
}
