/// Owned form of the [`super::SliderListener`] callbacks, for queue-based consumers
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    StartedObserving { values: Vec<f32> },
    ValueChanged { values: Vec<f32> },
    StoppedObserving { values: Vec<f32> },
}

impl SliderEvent {
    pub fn values(&self) -> &[f32] {
        match self {
            Self::StartedObserving { values }
            | Self::ValueChanged { values }
            | Self::StoppedObserving { values } => values,
        }
    }
}
