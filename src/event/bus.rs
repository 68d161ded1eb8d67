use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::event::{SliderEvent, SliderListener};

/// Fans slider notifications out to any number of listeners and channels.
///
/// The bus is itself a [`SliderListener`], so it can be attached to a slider
/// wherever a single listener is expected.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn SliderListener>>,
    channels: Vec<UnboundedSender<SliderEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .field("channels", &self.channels.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener to receive callbacks
    pub fn subscribe(&mut self, handler: Box<dyn SliderListener>) {
        self.handlers.push(handler);
    }

    /// Opens a channel that receives every event as a [`SliderEvent`].
    ///
    /// Dropping the receiver unsubscribes it on the next emitted event.
    pub fn channel(&mut self) -> UnboundedReceiver<SliderEvent> {
        let (sender, receiver) = mpsc::unbounded();
        self.channels.push(sender);
        receiver
    }

    fn emit(&mut self, event: SliderEvent) {
        self.channels.retain(|sender| sender.unbounded_send(event.clone()).is_ok());
    }
}

impl SliderListener for EventBus {
    fn on_start_observing_touch(&mut self, values: &[f32]) {
        for handler in &mut self.handlers {
            handler.on_start_observing_touch(values);
        }
        self.emit(SliderEvent::StartedObserving {
            values: values.to_vec(),
        });
    }

    fn on_value_changed(&mut self, values: &[f32]) {
        for handler in &mut self.handlers {
            handler.on_value_changed(values);
        }
        self.emit(SliderEvent::ValueChanged {
            values: values.to_vec(),
        });
    }

    fn on_stop_observing_touch(&mut self, values: &[f32]) {
        for handler in &mut self.handlers {
            handler.on_stop_observing_touch(values);
        }
        self.emit(SliderEvent::StoppedObserving {
            values: values.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use futures::executor::block_on;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Counter(Arc<Mutex<usize>>);

    impl SliderListener for Counter {
        fn on_start_observing_touch(&mut self, _values: &[f32]) {}

        fn on_value_changed(&mut self, _values: &[f32]) {
            *self.0.lock() += 1;
        }

        fn on_stop_observing_touch(&mut self, _values: &[f32]) {}
    }

    #[test]
    fn test_bus_forwards_to_handlers_and_channels() {
        let count = Arc::new(Mutex::new(0));
        let mut bus = EventBus::new();
        bus.subscribe(Box::new(Counter(count.clone())));
        let receiver = bus.channel();

        bus.on_start_observing_touch(&[1.0]);
        bus.on_value_changed(&[2.0]);
        bus.on_value_changed(&[3.0]);
        bus.on_stop_observing_touch(&[3.0]);
        drop(bus);

        assert_eq!(*count.lock(), 2);
        let events: Vec<SliderEvent> = block_on(receiver.collect());
        assert_eq!(
            events,
            vec![
                SliderEvent::StartedObserving { values: vec![1.0] },
                SliderEvent::ValueChanged { values: vec![2.0] },
                SliderEvent::ValueChanged { values: vec![3.0] },
                SliderEvent::StoppedObserving { values: vec![3.0] },
            ]
        );
    }

    #[test]
    fn test_dropped_receiver_is_unsubscribed() {
        let mut bus = EventBus::new();
        let receiver = bus.channel();
        drop(receiver);
        bus.on_value_changed(&[1.0]);
        assert!(bus.channels.is_empty());
    }
}
