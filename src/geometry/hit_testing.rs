use egui::Pos2;
use serde::{Deserialize, Serialize};

use super::SliderPath;

/// Extra room around a thumb that still counts as touching it
pub const DEFAULT_TOUCH_SLACK: f32 = 5.0;

/// Which proximity tests a press must pass before a thumb can be grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchTolerance {
    /// The press must land within `radius + slack` of the thumb itself
    NearThumb,
    /// The press must land within `radius + slack` of the path; the closest
    /// thumb is grabbed regardless of how far along the path it sits
    NearPath,
    /// Either test is enough
    #[default]
    Either,
    /// Both tests must pass
    Both,
}

/// Largest distance from a thumb centre, or from the path, that still counts as a hit
pub fn touch_allowance(radius: f32, slack: f32) -> f32 {
    radius + slack
}

pub fn is_near_thumb(point: Pos2, center: Pos2, allowance: f32) -> bool {
    point.distance(center) <= allowance
}

pub fn is_near_path(point: Pos2, path: &SliderPath, allowance: f32) -> bool {
    path.distance_to(point) <= allowance
}

impl TouchTolerance {
    /// Whether a thumb centred at `center` may be grabbed by a press at `point`
    pub fn accepts(
        self,
        point: Pos2,
        center: Pos2,
        path: &SliderPath,
        allowance: f32,
    ) -> bool {
        match self {
            Self::NearThumb => is_near_thumb(point, center, allowance),
            Self::NearPath => is_near_path(point, path, allowance),
            Self::Either => {
                is_near_thumb(point, center, allowance) || is_near_path(point, path, allowance)
            }
            Self::Both => {
                is_near_thumb(point, center, allowance) && is_near_path(point, path, allowance)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LinearPath;

    fn line() -> SliderPath {
        SliderPath::Linear(LinearPath::new(Pos2::new(50.0, 100.0), Pos2::new(550.0, 100.0)))
    }

    #[test]
    fn test_tolerance_policies() {
        let path = line();
        let thumb = Pos2::new(50.0, 100.0);
        let allowance = touch_allowance(50.0, DEFAULT_TOUCH_SLACK);

        // On the path, far from the thumb
        let on_path = Pos2::new(400.0, 110.0);
        assert!(!TouchTolerance::NearThumb.accepts(on_path, thumb, &path, allowance));
        assert!(TouchTolerance::NearPath.accepts(on_path, thumb, &path, allowance));
        assert!(TouchTolerance::Either.accepts(on_path, thumb, &path, allowance));
        assert!(!TouchTolerance::Both.accepts(on_path, thumb, &path, allowance));

        // Close to the thumb and the path
        let on_thumb = Pos2::new(60.0, 120.0);
        for tolerance in [
            TouchTolerance::NearThumb,
            TouchTolerance::NearPath,
            TouchTolerance::Either,
            TouchTolerance::Both,
        ] {
            assert!(tolerance.accepts(on_thumb, thumb, &path, allowance));
        }

        // Nowhere near anything
        let far = Pos2::new(300.0, 400.0);
        assert!(!TouchTolerance::Either.accepts(far, thumb, &path, allowance));
    }

    #[test]
    fn test_allowance_boundary_is_inclusive() {
        let center = Pos2::new(0.0, 0.0);
        assert!(is_near_thumb(Pos2::new(55.0, 0.0), center, touch_allowance(50.0, 5.0)));
        assert!(!is_near_thumb(Pos2::new(55.5, 0.0), center, touch_allowance(50.0, 5.0)));
    }
}
