use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::SliderConfig;
use crate::error::ConfigResult;
use crate::event::SliderListener;
use crate::widgets::SliderWidget;

/// Writes the latest thumb values into a shared label
pub struct ValueReadout {
    text: Arc<Mutex<String>>,
}

impl ValueReadout {
    pub fn new(text: Arc<Mutex<String>>) -> Self {
        Self { text }
    }
}

impl SliderListener for ValueReadout {
    fn on_start_observing_touch(&mut self, _values: &[f32]) {
        *self.text.lock() = "Ready".to_owned();
    }

    fn on_value_changed(&mut self, values: &[f32]) {
        let mut text = String::new();
        for (i, value) in values.iter().enumerate() {
            text.push_str(&format!("Thumb {}: {:.1}\n", i + 1, value));
        }
        *self.text.lock() = text;
    }

    fn on_stop_observing_touch(&mut self, _values: &[f32]) {}
}

/// Demo window with a one-thumb line slider and a three-thumb arc slider
pub struct SliderApp {
    line: SliderWidget,
    line_text: Arc<Mutex<String>>,
    arc: SliderWidget,
    arc_text: Arc<Mutex<String>>,
}

impl SliderApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, arc_config: SliderConfig) -> ConfigResult<Self> {
        let mut line = SliderWidget::new(SliderConfig::line(1, 0.0, 100.0, 60))?;
        let line_text = Arc::new(Mutex::new(String::new()));
        line.set_listener(Box::new(ValueReadout::new(line_text.clone())));

        let mut arc = SliderWidget::new(arc_config)?;
        let arc_text = Arc::new(Mutex::new(String::new()));
        arc.set_listener(Box::new(ValueReadout::new(arc_text.clone())));

        Ok(Self {
            line,
            line_text,
            arc,
            arc_text,
        })
    }
}

impl eframe::App for SliderApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("values").show(ctx, |ui| {
            ui.heading("Line");
            ui.label(self.line_text.lock().as_str());
            ui.separator();
            ui.heading("Arc");
            ui.label(self.arc_text.lock().as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.line.ui(ui);
            ui.separator();
            self.arc.ui(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.line.remove_listener();
        self.arc.remove_listener();
    }
}
