// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use eframe::{egui, App, Frame, NativeOptions};
use egui_switch::{
    constants::{WINDOW_HEIGHT, WINDOW_WIDTH},
    ToggleSwitch,
};

pub struct DemoWindow {
    switch: ToggleSwitch,
}

impl DemoWindow {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            switch: ToggleSwitch::new(),
        }
    }
}

impl App for DemoWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(WINDOW_HEIGHT / 3.0);
                let result = self.switch.show(ui);
                if result.animation_finished {
                    tracing::debug!("Switch settled: on = {}", self.switch.is_on());
                }
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    // Initialize logging based on build mode
    #[cfg(debug_assertions)]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        // In release mode, set up a no-op subscriber to disable logging
        use tracing_subscriber::Registry;
        let noop_subscriber = Registry::default();
        tracing::subscriber::set_global_default(noop_subscriber)
            .expect("Failed to set global subscriber.");
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Toggle Switch Demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoWindow::new(cc)))),
    )
}
