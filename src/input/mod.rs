use egui::{Context, Pos2, Rect, Vec2};

/// Host events understood by the slider, in widget-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInput {
    /// The host reported new available dimensions
    Resize { width: f32, height: f32 },
    /// Primary pointer went down
    Press(Pos2),
    /// Primary pointer moved while held down
    Move(Pos2),
    /// Primary pointer was released
    Release(Pos2),
    /// The pointer went away without a release, e.g. focus was lost mid-drag
    Cancel,
}

impl SliderInput {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Self::Press(pos) | Self::Move(pos) | Self::Release(pos) => Some(*pos),
            Self::Resize { .. } | Self::Cancel => None,
        }
    }
}

/// Handles converting raw egui pointer input into [`SliderInput`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Set while a press that started inside the widget is held
    tracking: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Process this frame's egui input for a widget occupying `rect`.
    ///
    /// Presses are only reported inside `rect`; once a press is tracked, moves
    /// and the release are reported wherever the pointer goes.
    pub fn process_input(&mut self, ctx: &Context, rect: Rect) -> Vec<SliderInput> {
        let (pressed, released, down, pos) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.primary_down(),
                input.pointer.latest_pos(),
            )
        });
        self.translate(pressed, released, down, pos, rect)
    }

    fn translate(
        &mut self,
        pressed: bool,
        released: bool,
        down: bool,
        pos: Option<Pos2>,
        rect: Rect,
    ) -> Vec<SliderInput> {
        let mut events = Vec::new();
        let offset = rect.min.to_vec2();
        let local = |pos: Pos2| pos - offset;

        if pressed {
            if let Some(pos) = pos.filter(|pos| rect.contains(*pos)) {
                self.tracking = true;
                self.last_pointer_pos = Some(pos);
                events.push(SliderInput::Press(local(pos)));
            }
        } else if self.tracking && down {
            if let Some(pos) = pos.filter(|pos| Some(*pos) != self.last_pointer_pos) {
                self.last_pointer_pos = Some(pos);
                events.push(SliderInput::Move(local(pos)));
            }
        }

        if released && self.tracking {
            // Touch screens may not report a position on the release frame
            if let Some(pos) = pos.or(self.last_pointer_pos) {
                events.push(SliderInput::Release(local(pos)));
            }
            self.tracking = false;
            self.last_pointer_pos = None;
        } else if self.tracking && !down {
            events.push(SliderInput::Cancel);
            self.tracking = false;
            self.last_pointer_pos = None;
        }

        events
    }
}

/// Offset that turns widget-local coordinates back into screen coordinates
pub fn screen_offset(rect: Rect) -> Vec2 {
    rect.min.to_vec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_rect() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(600.0, 200.0))
    }

    #[test]
    fn test_press_outside_is_not_tracked() {
        let mut handler = InputHandler::new();
        let events = handler.translate(true, false, true, Some(Pos2::new(10.0, 10.0)), widget_rect());
        assert!(events.is_empty());
        assert!(!handler.is_tracking());

        let events = handler.translate(false, false, true, Some(Pos2::new(300.0, 100.0)), widget_rect());
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_move_release_in_local_coordinates() {
        let mut handler = InputHandler::new();
        let rect = widget_rect();

        let events = handler.translate(true, false, true, Some(Pos2::new(150.0, 150.0)), rect);
        assert_eq!(events, vec![SliderInput::Press(Pos2::new(50.0, 100.0))]);

        // Unchanged position produces no move
        let events = handler.translate(false, false, true, Some(Pos2::new(150.0, 150.0)), rect);
        assert!(events.is_empty());

        // Moves keep flowing outside the widget
        let events = handler.translate(false, false, true, Some(Pos2::new(900.0, 150.0)), rect);
        assert_eq!(events, vec![SliderInput::Move(Pos2::new(800.0, 100.0))]);

        let events = handler.translate(false, true, false, None, rect);
        assert_eq!(events, vec![SliderInput::Release(Pos2::new(800.0, 100.0))]);
        assert!(!handler.is_tracking());
    }

    #[test]
    fn test_pointer_lost_without_release_cancels() {
        let mut handler = InputHandler::new();
        let rect = widget_rect();

        handler.translate(true, false, true, Some(Pos2::new(150.0, 150.0)), rect);
        let events = handler.translate(false, false, false, Some(Pos2::new(200.0, 150.0)), rect);
        assert_eq!(events, vec![SliderInput::Cancel]);
        assert!(!handler.is_tracking());

        // Nothing further once the drag is gone
        let events = handler.translate(false, false, false, None, rect);
        assert!(events.is_empty());
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut handler = InputHandler::new();
        let events = handler.translate(true, true, false, Some(Pos2::new(150.0, 150.0)), widget_rect());
        assert_eq!(
            events,
            vec![
                SliderInput::Press(Pos2::new(50.0, 100.0)),
                SliderInput::Release(Pos2::new(50.0, 100.0)),
            ]
        );
    }
}
