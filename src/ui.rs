// src/ui.rs
use egui;

const TEXT_SIZE: f32 = 20.0;
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

pub fn build_ui(ctx: &egui::Context) {
    egui::Window::new("Instructions")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("Click and drag to move light").size(TEXT_SIZE).color(TEXT_COLOR));
                ui.label(egui::RichText::new("Press F11 for fullscreen").size(TEXT_SIZE).color(TEXT_COLOR));
            });
        });
}
