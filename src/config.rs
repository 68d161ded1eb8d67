use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigLoadError, ConfigResult};
use crate::geometry::PathShape;
use crate::geometry::hit_testing::{DEFAULT_TOUCH_SLACK, TouchTolerance};
use crate::registry::LayoutPolicy;
use crate::value::ValueRange;

pub const DEFAULT_THUMB_RADIUS: f32 = 50.0;

/// Construction-time options for a slider.
///
/// Invalid options are rejected by [`SliderConfig::validate`] rather than
/// silently adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SliderConfig {
    pub shape: PathShape,
    pub thumb_count: usize,
    pub min: f32,
    pub max: f32,
    /// Share of the available width used by the path, `0..=100`
    pub width_percent: i32,
    /// Share of the available height used by an arc, `0..=100`
    pub height_percent: i32,
    pub layout: LayoutPolicy,
    pub touch_tolerance: TouchTolerance,
    pub thumb_radius: f32,
    pub touch_slack: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            shape: PathShape::Line,
            thumb_count: 1,
            min: 0.0,
            max: 100.0,
            width_percent: 100,
            height_percent: 100,
            layout: LayoutPolicy::IncludingOrigin,
            touch_tolerance: TouchTolerance::Either,
            thumb_radius: DEFAULT_THUMB_RADIUS,
            touch_slack: DEFAULT_TOUCH_SLACK,
        }
    }
}

impl SliderConfig {
    /// Straight slider over `min..=max`
    pub fn line(thumb_count: usize, min: f32, max: f32, width_percent: i32) -> Self {
        Self {
            shape: PathShape::Line,
            thumb_count,
            min,
            max,
            width_percent,
            ..Self::default()
        }
    }

    /// Quarter-ellipse slider over `min..=max`, thumbs laid out toward the end
    pub fn arc(
        thumb_count: usize,
        min: f32,
        max: f32,
        width_percent: i32,
        height_percent: i32,
    ) -> Self {
        Self {
            shape: PathShape::Arc,
            thumb_count,
            min,
            max,
            width_percent,
            height_percent,
            layout: LayoutPolicy::ExcludingOrigin,
            touch_tolerance: TouchTolerance::NearThumb,
            touch_slack: 10.0,
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: LayoutPolicy) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_touch_tolerance(mut self, tolerance: TouchTolerance) -> Self {
        self.touch_tolerance = tolerance;
        self
    }

    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.min, self.max)
    }

    /// Percentages narrowed to `u8`; only meaningful after [`Self::validate`]
    pub fn percents(&self) -> (u8, u8) {
        let narrow = |value: i32| u8::try_from(value.clamp(0, 100)).unwrap_or(100);
        (narrow(self.width_percent), narrow(self.height_percent))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBound {
                min: self.min,
                max: self.max,
            });
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        for (axis, value) in [("width", self.width_percent), ("height", self.height_percent)] {
            if !(0..=100).contains(&value) {
                return Err(ConfigError::PercentOutOfRange { axis, value });
            }
        }
        if !(self.thumb_radius.is_finite() && self.thumb_radius > 0.0) {
            return Err(ConfigError::InvalidThumbRadius(self.thumb_radius));
        }
        if !(self.touch_slack.is_finite() && self.touch_slack >= 0.0) {
            return Err(ConfigError::InvalidTouchSlack(self.touch_slack));
        }
        Ok(())
    }

    /// Parses and validates a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        info!("Loaded slider config: {:?}", config);
        Ok(config)
    }
}
