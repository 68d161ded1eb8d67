use egui::Pos2;

/// Straight segment parameterised by `t` in `0..=1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPath {
    pub start: Pos2,
    pub end: Pos2,
}

impl LinearPath {
    pub const DOMAIN_SPAN: f32 = 1.0;

    pub fn new(start: Pos2, end: Pos2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn position_of(&self, t: f32) -> Pos2 {
        self.start + (self.end - self.start) * t
    }

    /// Orthogonal projection of `point` onto the segment.
    ///
    /// The off-axis part of the point is discarded, so a touch anywhere above
    /// or below the line still lands on it.
    pub fn parameter_at(&self, point: Pos2) -> f32 {
        let axis = self.end - self.start;
        let length_sq = axis.length_sq();
        if length_sq <= f32::EPSILON {
            return 0.0;
        }
        ((point - self.start).dot(axis) / length_sq).clamp(0.0, Self::DOMAIN_SPAN)
    }
}
