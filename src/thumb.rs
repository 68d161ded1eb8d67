use egui::Pos2;

use crate::geometry::SliderPath;
use crate::value::{self, ValueRange};

/// A draggable marker bound to one path parameter.
///
/// The on-screen position is never stored: it is derived from the current
/// path every time so a resize moves the thumb without touching its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    parameter: f32,
    value: f32,
    active: bool,
    radius: f32,
}

impl Thumb {
    /// Thumb resting at the start of the path
    pub fn new(radius: f32, range: ValueRange) -> Self {
        Self {
            parameter: 0.0,
            value: range.min,
            active: false,
            radius,
        }
    }

    pub fn parameter(&self) -> f32 {
        self.parameter
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self, path: &SliderPath) -> Pos2 {
        path.position_of(self.parameter)
    }

    /// Clamps `parameter` onto the path and recomputes the value from it
    pub(crate) fn set_parameter(&mut self, parameter: f32, path: &SliderPath, range: ValueRange) {
        self.parameter = path.clamp_parameter(parameter);
        self.value = value::value_of(self.parameter, path.domain_span(), range);
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ArcPath;

    #[test]
    fn test_new_thumb_sits_at_min() {
        let thumb = Thumb::new(50.0, ValueRange::new(100.0, 200.0));
        assert_eq!(thumb.parameter(), 0.0);
        assert_eq!(thumb.value(), 100.0);
        assert!(!thumb.is_active());
    }

    #[test]
    fn test_set_parameter_clamps_and_updates_value() {
        let path = SliderPath::Arc(ArcPath::new(Pos2::new(100.0, 600.0), 500.0, 500.0));
        let range = ValueRange::new(100.0, 200.0);
        let mut thumb = Thumb::new(50.0, range);

        thumb.set_parameter(135.0, &path, range);
        assert_eq!(thumb.parameter(), 90.0);
        assert_eq!(thumb.value(), 200.0);

        thumb.set_parameter(45.0, &path, range);
        assert_eq!(thumb.value(), 150.0);
    }
}
