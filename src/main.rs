use eframe::egui;

use egui_stepper::settings;
use egui_stepper::ui::DemoApp;

fn main() -> eframe::Result<()> {
    // Logging first: layout passes trace through the `log` crate, so
    // RUST_LOG=egui_stepper=trace surfaces the solved geometry per frame.
    env_logger::init();

    let demo_settings = settings::load_or_default();
    log::info!(
        "stepper demo starting with {} steps",
        demo_settings.stepper.step_count
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stepper Demo",
        options,
        Box::new(move |_cc| Box::new(DemoApp::new(demo_settings))),
    )
}
