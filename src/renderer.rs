use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2};

use crate::geometry::SliderPath;
use crate::state::SliderState;

pub const LINE_STROKE_WIDTH: f32 = 25.0;
pub const ARC_STROKE_WIDTH: f32 = 20.0;
pub const LINE_ACTIVE_COLOR: Color32 = Color32::from_rgb(0x3F, 0x51, 0xB5);
pub const LINE_INACTIVE_COLOR: Color32 = Color32::LIGHT_GRAY;
pub const THUMB_INACTIVE_COLOR: Color32 = Color32::from_rgb(0x3F, 0x51, 0xB5);
pub const THUMB_ACTIVE_COLOR: Color32 = Color32::from_rgb(0x30, 0x3F, 0x9F);

/// A polyline to stroke, in widget-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub points: Vec<Pos2>,
    pub stroke: Stroke,
    pub active: bool,
}

/// A filled thumb circle, in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbCircle {
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub active: bool,
}

/// Draw primitives for one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderScene {
    /// The inactive full path, then the active sub-path when it is non-empty
    pub segments: Vec<PathSegment>,
    /// One circle per thumb in index order
    pub thumbs: Vec<ThumbCircle>,
}

impl SliderScene {
    /// Snapshot of what `state` looks like right now
    pub fn build(state: &SliderState) -> Self {
        let path = state.path();
        let width = match path {
            SliderPath::Linear(_) => LINE_STROKE_WIDTH,
            SliderPath::Arc(_) => ARC_STROKE_WIDTH,
        };

        let mut segments = vec![PathSegment {
            points: path.sample(0.0, path.domain_span()),
            stroke: Stroke::new(width, LINE_INACTIVE_COLOR),
            active: false,
        }];

        let range = state.active_range();
        if !range.is_empty() {
            segments.push(PathSegment {
                points: path.sample(range.start, range.end),
                stroke: Stroke::new(width, LINE_ACTIVE_COLOR),
                active: true,
            });
        }

        let thumbs = state
            .registry()
            .thumbs()
            .iter()
            .map(|thumb| ThumbCircle {
                center: thumb.position(path),
                radius: thumb.radius(),
                color: if thumb.is_active() {
                    THUMB_ACTIVE_COLOR
                } else {
                    THUMB_INACTIVE_COLOR
                },
                active: thumb.is_active(),
            })
            .collect();

        Self { segments, thumbs }
    }

    /// Emits the scene as egui shapes, shifted by `offset` into screen space
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        for segment in &self.segments {
            let points = segment.points.iter().map(|p| *p + offset).collect();
            painter.add(Shape::line(points, segment.stroke));
        }
        for thumb in &self.thumbs {
            painter.circle_filled(thumb.center + offset, thumb.radius, thumb.color);
        }
    }
}
