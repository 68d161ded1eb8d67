use egui::{Pos2, Vec2};
use log::{debug, warn};

use crate::config::SliderConfig;
use crate::error::ConfigResult;
use crate::geometry::{self, SliderPath};
use crate::registry::{ActiveRange, ThumbRegistry};

/// Everything a slider knows about itself: configuration, the current path
/// and the thumbs on it.
///
/// The interaction controller mutates it; the renderer only reads it.
#[derive(Debug, Clone)]
pub struct SliderState {
    config: SliderConfig,
    path: SliderPath,
    desired_size: Vec2,
    available: Vec2,
    registry: ThumbRegistry,
}

impl SliderState {
    /// Validates `config` and builds the slider with default dimensions
    pub fn new(config: SliderConfig) -> ConfigResult<Self> {
        config.validate()?;

        let available = Vec2::ZERO;
        let (path, desired_size) = Self::fit(&config, available);
        let registry = ThumbRegistry::new(config.thumb_count, config.range(), config.thumb_radius);

        Ok(Self {
            config,
            path,
            desired_size,
            available,
            registry,
        })
    }

    fn fit(config: &SliderConfig, available: Vec2) -> (SliderPath, Vec2) {
        let (width_percent, height_percent) = config.percents();
        geometry::fit_path(
            config.shape,
            available,
            width_percent,
            height_percent,
            config.thumb_radius,
        )
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn path(&self) -> &SliderPath {
        &self.path
    }

    pub fn registry(&self) -> &ThumbRegistry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut ThumbRegistry {
        &mut self.registry
    }

    /// Size the slider asks its host for, given the last reported dimensions
    pub fn desired_size(&self) -> Vec2 {
        self.desired_size
    }

    /// Refits the path to new available dimensions.
    ///
    /// Thumbs keep their parameters, so values survive the resize and only the
    /// derived positions move. Returns whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let available = Vec2::new(width, height);
        if available == self.available {
            return false;
        }
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            warn!("Degenerate slider dimensions {width}x{height}, using defaults where needed");
        }

        let (path, desired_size) = Self::fit(&self.config, available);
        self.available = available;
        self.path = path;
        self.desired_size = desired_size;
        self.registry.reclamp(&self.path);
        debug!("Slider resized to {width}x{height}, path {:?}", self.path);
        true
    }

    /// Spreads the thumbs along the path using the configured layout policy
    pub fn setup(&mut self) {
        self.registry.recompute_layout(&self.path, self.config.layout);
    }

    pub fn values(&self) -> Vec<f32> {
        self.registry.values()
    }

    pub fn active_range(&self) -> ActiveRange {
        self.registry.active_range(&self.path)
    }

    pub fn thumb_position(&self, index: usize) -> Option<Pos2> {
        self.registry.thumb(index).map(|thumb| thumb.position(&self.path))
    }

    /// Places thumb `index` at `value` without notifying any listener
    pub fn set_value(&mut self, index: usize, value: f32) -> Option<f32> {
        self.registry.set_value(index, value, &self.path)
    }
}
