// Clinic Scheduler Application
// Main entry point

use anyhow::anyhow;

use clinic_scheduler::ui_egui::SchedulerApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Clinic Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Clinic Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc)))),
    )
    .map_err(|err| anyhow!("failed to launch UI: {err}"))
}
