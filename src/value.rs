//! Conversion between path parameters and user-facing values.

use serde::{Deserialize, Serialize};

/// Closed value interval shared by every thumb of a slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Value for a parameter in `0..=domain_span`
pub fn value_of(parameter: f32, domain_span: f32, range: ValueRange) -> f32 {
    parameter / domain_span * range.span() + range.min
}

/// Parameter placing a thumb at `value`; values outside the range are clamped first
pub fn parameter_of(value: f32, domain_span: f32, range: ValueRange) -> f32 {
    let span = range.span();
    if span == 0.0 {
        return 0.0;
    }
    (range.clamp(value) - range.min) / span * domain_span
}
