use egui::Pos2;

use super::ARC_SEGMENTS;

/// Bisection rounds used to refine the closest sampled angle
const REFINE_ITERATIONS: usize = 32;

/// Upper-right quarter of an axis-aligned ellipse centred on `origin`.
///
/// The parameter is the polar angle in degrees of the radius vector from
/// `origin` to the point, measured counter-clockwise from the positive x axis
/// with screen y pointing down. [`ArcPath::position_of`] and
/// [`ArcPath::parameter_at`] both use this convention, so they invert each
/// other for every point on the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub origin: Pos2,
    pub semi_width: f32,
    pub semi_height: f32,
}

impl ArcPath {
    pub const DOMAIN_SPAN: f32 = 90.0;

    pub fn new(origin: Pos2, semi_width: f32, semi_height: f32) -> Self {
        Self {
            origin,
            semi_width,
            semi_height,
        }
    }

    /// Boundary point whose radius vector has the given angle.
    ///
    /// Solves `x²/W² + y²/H² = 1` along the ray, giving
    /// `r = W·H / sqrt(H²cos² + W²sin²)`.
    pub fn position_of(&self, angle: f32) -> Pos2 {
        let (sin, cos) = angle.to_radians().sin_cos();
        let (w, h) = (self.semi_width, self.semi_height);
        let k = 1.0 / (h * h * cos * cos + w * w * sin * sin).sqrt();

        Pos2::new(
            self.origin.x + cos * k * w * h,
            self.origin.y - sin * k * w * h,
        )
    }

    pub fn parameter_at(&self, point: Pos2) -> f32 {
        let dx = point.x - self.origin.x;
        let dy = self.origin.y - point.y;
        dy.atan2(dx).to_degrees().clamp(0.0, Self::DOMAIN_SPAN)
    }

    /// Angle of the arc point with the smallest Euclidean distance to `point`.
    ///
    /// Unlike [`ArcPath::parameter_at`] this follows the ellipse normal, not
    /// the radius vector, so it stays exact on flattened ellipses. The arc is
    /// sampled densely, then the best bracket is narrowed by ternary search.
    pub fn closest_parameter(&self, point: Pos2) -> f32 {
        let samples = 2 * ARC_SEGMENTS;
        let step = Self::DOMAIN_SPAN / samples as f32;
        let distance = |angle: f32| self.position_of(angle).distance_sq(point);

        let mut best = 0.0;
        let mut best_distance = f32::INFINITY;
        for i in 0..=samples {
            let angle = i as f32 * step;
            let d = distance(angle);
            if d < best_distance {
                best = angle;
                best_distance = d;
            }
        }

        let mut low = (best - step).max(0.0);
        let mut high = (best + step).min(Self::DOMAIN_SPAN);
        for _ in 0..REFINE_ITERATIONS {
            let a = low + (high - low) / 3.0;
            let b = high - (high - low) / 3.0;
            if distance(a) <= distance(b) {
                high = b;
            } else {
                low = a;
            }
        }
        (low + high) / 2.0
    }

    /// Shortest distance from `point` to the quarter arc
    pub fn distance_to(&self, point: Pos2) -> f32 {
        point.distance(self.position_of(self.closest_parameter(point)))
    }
}
