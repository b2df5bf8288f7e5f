use serde::{Deserialize, Serialize};

/// Tunables shared by every property field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Fraction digits for numbers without a schema precision.
    pub default_precision: u32,
    /// Scrub step for unbounded numbers without a schema step.
    pub default_step: f64,
    /// Manhattan distance in pixels a press must travel to become a drag.
    pub drag_threshold: f32,
    pub fine_factor: f64,
    pub coarse_factor: f64,
    /// Fraction digits used to pre-fill the number editor.
    pub edit_precision: usize,
    /// Control width used to derive the scrub step of bounded numbers.
    pub width: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            default_precision: 3,
            default_step: 0.1,
            drag_threshold: 2.0,
            fine_factor: 0.1,
            coarse_factor: 10.0,
            edit_precision: 5,
            width: 120.0,
        }
    }
}

impl FieldSettings {
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_default_precision(mut self, precision: u32) -> Self {
        self.default_precision = precision;
        self
    }
}
