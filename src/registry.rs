//! Ordered collection of thumbs sharing one value range.

use egui::Pos2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::SliderPath;
use crate::geometry::hit_testing::{TouchTolerance, touch_allowance};
use crate::thumb::Thumb;
use crate::value::{self, ValueRange};

/// Where [`ThumbRegistry::recompute_layout`] puts the thumbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutPolicy {
    /// Leave every thumb at the start of the path
    Stacked,
    /// Thumb `i` of `n` at `i / n` of the domain; the first sits on the origin
    #[default]
    IncludingOrigin,
    /// Thumb `i` of `n` at `(i + 1) / n` of the domain; the last sits on the end
    ExcludingOrigin,
}

/// Stretch of the path drawn in the "selected" style, in path parameters.
///
/// `start` may exceed `end` when the first thumb was dragged past the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRange {
    pub start: f32,
    pub end: f32,
}

impl ActiveRange {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone)]
pub struct ThumbRegistry {
    thumbs: Vec<Thumb>,
    range: ValueRange,
    active: Option<usize>,
}

impl ThumbRegistry {
    /// Creates `count` thumbs at the path start, each valued `range.min`
    pub fn new(count: usize, range: ValueRange, radius: f32) -> Self {
        Self {
            thumbs: (0..count).map(|_| Thumb::new(radius, range)).collect(),
            range,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn thumbs(&self) -> &[Thumb] {
        &self.thumbs
    }

    pub fn thumb(&self, index: usize) -> Option<&Thumb> {
        self.thumbs.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Snapshot of every thumb's value in index order
    pub fn values(&self) -> Vec<f32> {
        self.thumbs.iter().map(Thumb::value).collect()
    }

    /// Spreads the thumbs evenly along the path in index order
    pub fn recompute_layout(&mut self, path: &SliderPath, policy: LayoutPolicy) {
        if self.thumbs.is_empty() {
            return;
        }

        let count = self.thumbs.len() as f32;
        let span = path.domain_span();
        let range = self.range;
        for (i, thumb) in self.thumbs.iter_mut().enumerate() {
            let slot = match policy {
                LayoutPolicy::Stacked => 0.0,
                LayoutPolicy::IncludingOrigin => i as f32,
                LayoutPolicy::ExcludingOrigin => (i + 1) as f32,
            };
            thumb.set_parameter(span * slot / count, path, range);
        }
        debug!("Laid out {} thumbs with {:?}: {:?}", self.thumbs.len(), policy, self.values());
    }

    /// Re-applies clamping to every stored parameter
    pub fn reclamp(&mut self, path: &SliderPath) {
        let range = self.range;
        for thumb in &mut self.thumbs {
            thumb.set_parameter(thumb.parameter(), path, range);
        }
    }

    pub fn active_range(&self, path: &SliderPath) -> ActiveRange {
        match self.thumbs.as_slice() {
            [] => {
                let end = path.domain_span();
                ActiveRange { start: end, end }
            }
            [only] => ActiveRange {
                start: 0.0,
                end: only.parameter(),
            },
            [first, .., last] => ActiveRange {
                start: first.parameter(),
                end: last.parameter(),
            },
        }
    }

    /// Nearest thumb that `tolerance` lets a press at `point` grab.
    ///
    /// Ties go to the lowest index.
    pub fn closest_thumb(
        &self,
        point: Pos2,
        path: &SliderPath,
        tolerance: TouchTolerance,
        slack: f32,
    ) -> Option<usize> {
        let mut closest: Option<(usize, f32)> = None;
        for (index, thumb) in self.thumbs.iter().enumerate() {
            let center = thumb.position(path);
            let allowance = touch_allowance(thumb.radius(), slack);
            if !tolerance.accepts(point, center, path, allowance) {
                continue;
            }

            let distance = point.distance(center);
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }
        closest.map(|(index, _)| index)
    }

    /// Marks `index` as the only active thumb. Returns false for unknown indices.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.thumbs.len() {
            return false;
        }
        self.deactivate();
        self.thumbs[index].set_active(true);
        self.active = Some(index);
        true
    }

    pub fn deactivate(&mut self) {
        if let Some(index) = self.active.take() {
            self.thumbs[index].set_active(false);
        }
    }

    /// Moves thumb `index` to the path point nearest `point`.
    /// Returns the new value, or `None` for unknown indices.
    pub fn move_thumb_to(&mut self, index: usize, point: Pos2, path: &SliderPath) -> Option<f32> {
        let parameter = path.parameter_at(point);
        self.set_parameter(index, parameter, path)
    }

    pub fn set_parameter(&mut self, index: usize, parameter: f32, path: &SliderPath) -> Option<f32> {
        let range = self.range;
        let thumb = self.thumbs.get_mut(index)?;
        thumb.set_parameter(parameter, path, range);
        Some(thumb.value())
    }

    /// Places thumb `index` at `value`, clamped into the range
    pub fn set_value(&mut self, index: usize, value: f32, path: &SliderPath) -> Option<f32> {
        let parameter = value::parameter_of(value, path.domain_span(), self.range);
        self.set_parameter(index, parameter, path)
    }
}
