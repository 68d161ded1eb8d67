use egui::{Response, Sense, Ui};
use log::info;

use crate::config::SliderConfig;
use crate::controller::{InputOutcome, InteractionController};
use crate::error::ConfigResult;
use crate::event::SliderListener;
use crate::input::{self, InputHandler, SliderInput};
use crate::renderer::SliderScene;
use crate::state::SliderState;

/// Slider bundled with its controller and egui input translation
#[derive(Debug)]
pub struct SliderWidget {
    state: SliderState,
    controller: InteractionController,
    input: InputHandler,
    laid_out: bool,
}

impl SliderWidget {
    pub fn new(config: SliderConfig) -> ConfigResult<Self> {
        info!(
            "Creating {:?} slider with {} thumbs over {}..={}",
            config.shape, config.thumb_count, config.min, config.max
        );
        Ok(Self {
            state: SliderState::new(config)?,
            controller: InteractionController::new(),
            input: InputHandler::new(),
            laid_out: false,
        })
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn values(&self) -> Vec<f32> {
        self.state.values()
    }

    pub fn set_listener(&mut self, listener: Box<dyn SliderListener>) {
        self.controller.set_listener(listener, &self.state);
    }

    pub fn remove_listener(&mut self) -> Option<Box<dyn SliderListener>> {
        self.controller.remove_listener(&self.state)
    }

    /// Spreads the thumbs along the path; done automatically on the first frame
    pub fn setup(&mut self) {
        self.state.setup();
        self.laid_out = true;
    }

    pub fn handle(&mut self, input: SliderInput) -> InputOutcome {
        self.controller.handle(input, &mut self.state)
    }

    pub fn scene(&self) -> SliderScene {
        SliderScene::build(&self.state)
    }

    /// Lays out, handles this frame's pointer input and paints the slider
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let available = ui.available_size();
        self.handle(SliderInput::Resize {
            width: available.x,
            height: available.y,
        });
        if !self.laid_out {
            self.setup();
        }

        let (rect, mut response) =
            ui.allocate_exact_size(self.state.desired_size(), Sense::click_and_drag());

        for event in self.input.process_input(ui.ctx(), rect) {
            let outcome = self.handle(event);
            if outcome.value_changed {
                response.mark_changed();
            }
            if outcome.redraw {
                ui.ctx().request_repaint();
            }
        }

        if ui.is_rect_visible(rect) {
            self.scene().paint(ui.painter(), input::screen_offset(rect));
        }
        response
    }
}
