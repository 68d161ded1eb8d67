//! Paths that slider thumbs are constrained to.
//!
//! Every path maps a one-dimensional parameter onto widget-local coordinates
//! and back. A [`SliderPath`] is chosen once from the configured
//! [`PathShape`] and rebuilt by [`fit_path`] whenever the host reports new
//! available dimensions.

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod arc;
pub mod hit_testing;
mod linear;

pub use arc::ArcPath;
pub use linear::LinearPath;

/// Space kept around the path so thumbs are not cut off at the edges
pub const PADDING: f32 = 50.0;
/// Path extent used when the host gives no usable dimension
pub const DEFAULT_EXTENT: f32 = 500.0;
/// Smallest extent a path may collapse to
pub const MIN_EXTENT: f32 = 1.0;
/// Number of polyline segments used to approximate a full quarter arc
pub const ARC_SEGMENTS: usize = 64;

/// Which kind of path the slider uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathShape {
    /// Horizontal straight segment
    #[default]
    Line,
    /// Quarter ellipse sweeping from the horizontal axis up to the vertical one
    Arc,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderPath {
    Linear(LinearPath),
    Arc(ArcPath),
}

impl SliderPath {
    /// Point on the path for an (unclamped) parameter
    pub fn position_of(&self, parameter: f32) -> Pos2 {
        let parameter = self.clamp_parameter(parameter);
        match self {
            Self::Linear(line) => line.position_of(parameter),
            Self::Arc(arc) => arc.position_of(parameter),
        }
    }

    /// Parameter of the path point nearest to `point`, already clamped
    pub fn parameter_at(&self, point: Pos2) -> f32 {
        match self {
            Self::Linear(line) => line.parameter_at(point),
            Self::Arc(arc) => arc.parameter_at(point),
        }
    }

    /// Clamps a parameter into `0..=domain_span()`. NaN maps to the path start.
    pub fn clamp_parameter(&self, parameter: f32) -> f32 {
        if parameter.is_nan() {
            return 0.0;
        }
        parameter.clamp(0.0, self.domain_span())
    }

    /// Upper bound of the parameter domain (1 for lines, 90 degrees for arcs)
    pub fn domain_span(&self) -> f32 {
        match self {
            Self::Linear(_) => LinearPath::DOMAIN_SPAN,
            Self::Arc(_) => ArcPath::DOMAIN_SPAN,
        }
    }

    /// Distance from `point` to the closest point of the path
    pub fn distance_to(&self, point: Pos2) -> f32 {
        match self {
            Self::Linear(line) => point.distance(line.position_of(line.parameter_at(point))),
            Self::Arc(arc) => arc.distance_to(point),
        }
    }

    /// Polyline following the path between two parameters.
    ///
    /// `from` may be greater than `to`; the points then run backwards along
    /// the path. Equal parameters yield a single point.
    pub fn sample(&self, from: f32, to: f32) -> Vec<Pos2> {
        let from = self.clamp_parameter(from);
        let to = self.clamp_parameter(to);
        if from == to {
            return vec![self.position_of(from)];
        }

        match self {
            Self::Linear(line) => vec![line.position_of(from), line.position_of(to)],
            Self::Arc(arc) => {
                let fraction = (to - from).abs() / ArcPath::DOMAIN_SPAN;
                let steps = ((ARC_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
                (0..=steps)
                    .map(|i| {
                        let t = i as f32 / steps as f32;
                        arc.position_of(from + (to - from) * t)
                    })
                    .collect()
            }
        }
    }
}

/// Builds the path for the given available space and reports the size the
/// widget wants to occupy.
///
/// Non-positive or non-finite dimensions fall back to [`DEFAULT_EXTENT`].
pub fn fit_path(
    shape: PathShape,
    available: Vec2,
    width_percent: u8,
    height_percent: u8,
    thumb_radius: f32,
) -> (SliderPath, Vec2) {
    match shape {
        PathShape::Line => {
            let length = match usable_dimension(available.x) {
                Some(width) => width * f32::from(width_percent) / 100.0 - 2.0 * PADDING,
                None => DEFAULT_EXTENT,
            }
            .max(MIN_EXTENT);

            let y = PADDING + thumb_radius;
            let line = LinearPath::new(Pos2::new(PADDING, y), Pos2::new(PADDING + length, y));

            let mut height = 2.0 * (thumb_radius + PADDING);
            if let Some(available_height) = usable_dimension(available.y) {
                height = height.min(available_height);
            }
            (SliderPath::Linear(line), Vec2::new(length + 2.0 * PADDING, height))
        }
        PathShape::Arc => {
            let semi_width = scaled_extent(available.x, width_percent);
            let semi_height = scaled_extent(available.y, height_percent);

            let inset = PADDING + thumb_radius;
            let origin = Pos2::new(inset, semi_height + inset);
            let arc = ArcPath::new(origin, semi_width, semi_height);
            (
                SliderPath::Arc(arc),
                Vec2::new(semi_width + 2.0 * inset, semi_height + 2.0 * inset),
            )
        }
    }
}

fn scaled_extent(available: f32, percent: u8) -> f32 {
    match usable_dimension(available) {
        Some(dimension) => (dimension * f32::from(percent) / 100.0).max(MIN_EXTENT),
        None => DEFAULT_EXTENT,
    }
}

fn usable_dimension(value: f32) -> Option<f32> {
    (value.is_finite() && value > 0.0).then_some(value)
}
