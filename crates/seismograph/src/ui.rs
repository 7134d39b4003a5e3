use eframe::egui::{self, Color32, Pos2, Rect, RichText, Sense, TextureHandle, Vec2};
use seismograph_core::Outcome;

pub const PANEL_BG: Color32 = Color32::from_rgb(0x2C, 0x2C, 0x2C);
pub const BACKDROP: Color32 = Color32::from_rgb(10, 10, 20);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(255, 200, 100);
pub const FULL_UV: Rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

pub fn white(text: impl Into<String>) -> RichText {
    RichText::new(text).color(Color32::WHITE)
}

pub fn instructions(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(PANEL_BG)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.label(white("Instructions:"));
            for step in [
                "1. Select soil type.",
                "2. Click 'Generate'.",
                "3. Click 'Calculate Magnitude'.",
                "4. Click 'Clear' to reset.",
            ] {
                ui.label(white(step));
            }
        });
}

/// Magnitude outcome table, with the row of the last result highlighted.
pub fn outcome_table(ui: &mut egui::Ui, current: Option<Outcome>) {
    egui::Frame::NONE
        .fill(PANEL_BG)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.label(white("Possible Outcomes Based on Magnitude:"));
            for outcome in Outcome::ALL {
                let row = format!("{}: {}", outcome.range_label(), outcome.description());
                if current == Some(outcome) {
                    ui.label(RichText::new(row).color(HIGHLIGHT).strong());
                } else {
                    ui.label(white(row));
                }
            }
        });
}

pub fn video_canvas(ui: &mut egui::Ui, texture: Option<&TextureHandle>, size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, Color32::BLACK);
    if let Some(texture) = texture {
        painter.image(texture.id(), rect, FULL_UV, Color32::WHITE);
    }
}
