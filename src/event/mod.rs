mod bus;
mod events;

pub use bus::EventBus;
pub use events::SliderEvent;

/// Observer notified by the interaction controller.
///
/// Every callback receives a snapshot of all thumb values in index order,
/// taken at call time.
pub trait SliderListener: Send {
    /// Called once when the listener is attached to a slider
    fn on_start_observing_touch(&mut self, values: &[f32]);

    /// Called synchronously after every accepted value change
    fn on_value_changed(&mut self, values: &[f32]);

    /// Called once when the listener is detached
    fn on_stop_observing_touch(&mut self, values: &[f32]);
}
