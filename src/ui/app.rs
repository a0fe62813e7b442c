//! Demo application screen.

use eframe::egui;

use crate::paint::StepperStyle;
use crate::settings::DemoSettings;
use crate::stepper::Stepper;
use crate::ui::widget;

/// eframe app hosting a single stepper with navigation controls.
pub struct DemoApp {
    stepper: Stepper,
    style: StepperStyle,
}

impl DemoApp {
    /// Build the demo from persisted settings; invalid settings fall back to
    /// the default configuration rather than aborting the demo.
    pub fn new(settings: DemoSettings) -> Self {
        let stepper = match Stepper::new(settings.stepper.clone()) {
            Ok(stepper) => stepper,
            Err(e) => {
                log::warn!("invalid stepper settings ({}), using defaults", e);
                Stepper::new(Default::default()).expect("default configuration is valid")
            }
        };
        let mut app = DemoApp {
            stepper,
            style: settings.style,
        };
        for (i, label) in settings.step_labels.iter().enumerate() {
            let _ = app
                .stepper
                .set_step_text(i, &label.primary, &label.secondary);
        }
        app
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Stepper");
            ui.add_space(8.0);

            widget::show(ui, &mut self.stepper, &self.style);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    self.stepper.step_back();
                }
                if ui.button("Next").clicked() {
                    self.stepper.step_forward();
                }
                ui.label(format!(
                    "Step {} of {}",
                    self.stepper.current_step() + 1,
                    self.stepper.step_count()
                ));
            });

            ui.add_space(4.0);
            ui.checkbox(&mut self.style.draw_labels, "Show labels");
        });
    }
}
