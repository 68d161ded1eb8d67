use thiserror::Error;

/// Errors raised while validating a [`crate::SliderConfig`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min` must be strictly below `max`
    #[error("invalid value range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f32, max: f32 },
    /// Range bounds must be finite numbers
    #[error("value range bounds must be finite (min: {min}, max: {max})")]
    NonFiniteBound { min: f32, max: f32 },
    /// Width or height percentage outside `0..=100`
    #[error("{axis} percent must be within 0..=100, got {value}")]
    PercentOutOfRange { axis: &'static str, value: i32 },
    /// Thumbs need a positive, finite hit radius
    #[error("thumb radius must be positive and finite, got {0}")]
    InvalidThumbRadius(f32),
    /// Touch slack may be zero but never negative
    #[error("touch slack must be non-negative and finite, got {0}")]
    InvalidTouchSlack(f32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failure to turn a JSON document into a valid [`crate::SliderConfig`]
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("malformed slider config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
