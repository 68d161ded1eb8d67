//! Touch state machine driving thumb drags.
//!
//! ```text
//! Idle --press near a thumb--> Dragging(i) --move--> Dragging(i)
//!   ^                               |
//!   +------------release------------+
//! ```
//!
//! Every accepted mutation is reported to the attached [`SliderListener`]
//! before the handling call returns.

use egui::Pos2;
use log::{debug, trace};

use crate::event::SliderListener;
use crate::input::SliderInput;
use crate::state::SliderState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        thumb: usize,
    },
}

/// What handling one input did to the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// A thumb value was updated and listeners were told
    pub value_changed: bool,
    /// The host should repaint
    pub redraw: bool,
}

impl InputOutcome {
    fn changed() -> Self {
        Self {
            value_changed: true,
            redraw: true,
        }
    }

    fn refresh() -> Self {
        Self {
            value_changed: false,
            redraw: true,
        }
    }
}

#[derive(Default)]
pub struct InteractionController {
    drag: DragState,
    listener: Option<Box<dyn SliderListener>>,
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("drag", &self.drag)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Attaches `listener`, detaching any previous one first.
    ///
    /// The new listener immediately receives `on_start_observing_touch`.
    pub fn set_listener(&mut self, mut listener: Box<dyn SliderListener>, state: &SliderState) {
        self.remove_listener(state);
        listener.on_start_observing_touch(&state.values());
        self.listener = Some(listener);
    }

    /// Detaches the current listener after sending it `on_stop_observing_touch`
    pub fn remove_listener(&mut self, state: &SliderState) -> Option<Box<dyn SliderListener>> {
        let mut listener = self.listener.take()?;
        listener.on_stop_observing_touch(&state.values());
        Some(listener)
    }

    pub fn handle(&mut self, input: SliderInput, state: &mut SliderState) -> InputOutcome {
        match input {
            SliderInput::Resize { width, height } => InputOutcome {
                value_changed: false,
                redraw: state.resize(width, height),
            },
            SliderInput::Press(point) => self.press(point, state),
            SliderInput::Move(point) => self.move_to(point, state),
            SliderInput::Release(point) => self.release(point, state),
            SliderInput::Cancel => self.cancel(state),
        }
    }

    pub fn press(&mut self, point: Pos2, state: &mut SliderState) -> InputOutcome {
        if let DragState::Dragging { thumb } = self.drag {
            return self.drag_to(thumb, point, state);
        }

        let config = state.config();
        let (tolerance, slack) = (config.touch_tolerance, config.touch_slack);
        let Some(thumb) = state.registry().closest_thumb(point, state.path(), tolerance, slack)
        else {
            trace!("Press at {:?} missed every thumb", point);
            return Self::idle_refresh(state);
        };

        state.registry_mut().activate(thumb);
        self.drag = DragState::Dragging { thumb };
        debug!("Started dragging thumb {thumb} at {:?}", point);
        self.drag_to(thumb, point, state)
    }

    pub fn move_to(&mut self, point: Pos2, state: &mut SliderState) -> InputOutcome {
        match self.drag {
            DragState::Dragging { thumb } => self.drag_to(thumb, point, state),
            DragState::Idle => Self::idle_refresh(state),
        }
    }

    pub fn release(&mut self, point: Pos2, state: &mut SliderState) -> InputOutcome {
        let DragState::Dragging { thumb } = self.drag else {
            return Self::idle_refresh(state);
        };

        let outcome = self.drag_to(thumb, point, state);
        self.finish_drag(state);
        debug!("Released thumb {thumb}, values {:?}", state.values());
        outcome
    }

    /// Ends a drag without a final update, e.g. when the host loses pointer capture
    pub fn cancel(&mut self, state: &mut SliderState) -> InputOutcome {
        if !self.is_dragging() {
            return InputOutcome::default();
        }
        self.finish_drag(state);
        debug!("Drag cancelled");
        InputOutcome::refresh()
    }

    fn finish_drag(&mut self, state: &mut SliderState) {
        state.registry_mut().deactivate();
        self.drag = DragState::Idle;
    }

    fn drag_to(&mut self, thumb: usize, point: Pos2, state: &mut SliderState) -> InputOutcome {
        let path = *state.path();
        let Some(value) = state.registry_mut().move_thumb_to(thumb, point, &path) else {
            self.finish_drag(state);
            return InputOutcome::refresh();
        };
        trace!("Thumb {thumb} -> {value}");
        self.notify_value_changed(state);
        InputOutcome::changed()
    }

    fn notify_value_changed(&mut self, state: &SliderState) {
        if state.registry().is_empty() {
            return;
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_value_changed(&state.values());
        }
    }

    fn idle_refresh(state: &mut SliderState) -> InputOutcome {
        let path = *state.path();
        state.registry_mut().reclamp(&path);
        InputOutcome::refresh()
    }
}
