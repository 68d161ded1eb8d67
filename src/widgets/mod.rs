pub mod shared;
pub mod slider;

pub use shared::SharedSlider;
pub use slider::SliderWidget;
