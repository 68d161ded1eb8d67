#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod registry;
pub mod renderer;
pub mod state;
pub mod thumb;
pub mod value;
pub mod widgets;

pub use app::SliderApp;
pub use config::SliderConfig;
pub use controller::{DragState, InputOutcome, InteractionController};
pub use error::{ConfigError, ConfigLoadError};
pub use event::{EventBus, SliderEvent, SliderListener};
pub use geometry::{PathShape, SliderPath};
pub use geometry::hit_testing::TouchTolerance;
pub use input::SliderInput;
pub use registry::{ActiveRange, LayoutPolicy, ThumbRegistry};
pub use renderer::SliderScene;
pub use state::SliderState;
pub use thumb::Thumb;
pub use value::ValueRange;
pub use widgets::{SharedSlider, SliderWidget};
