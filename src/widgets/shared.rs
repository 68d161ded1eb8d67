use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::controller::InputOutcome;
use crate::input::SliderInput;
use crate::renderer::SliderScene;
use crate::widgets::SliderWidget;

/// Slider handle for hosts that deliver events and render on different threads.
///
/// Event handling and scene building both run under the same lock, so a
/// scene never mixes thumb positions from before and after an update.
#[derive(Debug, Clone)]
pub struct SharedSlider {
    inner: Arc<Mutex<SliderWidget>>,
}

impl SharedSlider {
    pub fn new(widget: SliderWidget) -> Self {
        Self {
            inner: Arc::new(Mutex::new(widget)),
        }
    }

    pub fn handle(&self, input: SliderInput) -> InputOutcome {
        self.inner.lock().handle(input)
    }

    pub fn scene(&self) -> SliderScene {
        self.inner.lock().scene()
    }

    pub fn values(&self) -> Vec<f32> {
        self.inner.lock().values()
    }

    /// Direct access for anything else, e.g. painting inside an egui frame
    pub fn lock(&self) -> MutexGuard<'_, SliderWidget> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use egui::Pos2;
    use std::thread;

    #[test]
    fn test_updates_from_another_thread_are_visible() {
        let mut widget = SliderWidget::new(SliderConfig::line(1, 0.0, 100.0, 100)).unwrap();
        widget.handle(SliderInput::Resize { width: 600.0, height: 300.0 });
        widget.setup();
        let shared = SharedSlider::new(widget);

        let writer = shared.clone();
        thread::spawn(move || {
            writer.handle(SliderInput::Press(Pos2::new(50.0, 100.0)));
            writer.handle(SliderInput::Release(Pos2::new(300.0, 100.0)));
        })
        .join()
        .unwrap();

        assert_eq!(shared.values(), vec![50.0]);
        let scene = shared.scene();
        assert_eq!(scene.thumbs[0].center, Pos2::new(300.0, 100.0));
        assert!(!scene.thumbs[0].active);
    }
}
