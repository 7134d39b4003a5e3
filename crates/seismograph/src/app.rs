use std::sync::Arc;

use eframe::egui::{self, ColorImage, Rect, TextureHandle, TextureOptions, UiBuilder};
use seismograph_core::{
    FfmpegBackend, FrameSlot, Player, Seismograph, SeismographConfig, SoilType,
};
use tracing::{info, warn};

use crate::ui;

pub struct SeismographApp {
    config: SeismographConfig,
    seismograph: Seismograph,
    frames: FrameSlot,
    video: Option<TextureHandle>,
    background: Option<TextureHandle>,
}

impl SeismographApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SeismographConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let frames = FrameSlot::new();
        let backend = FfmpegBackend::new(
            config.ffmpeg_program.clone(),
            config.ffprobe_program.clone(),
        );
        let player = Player::new(
            Arc::new(backend),
            config.media.clone(),
            Arc::new(frames.clone()),
            config.playback,
        );
        let background = load_background(&cc.egui_ctx, &config);

        Self {
            seismograph: Seismograph::new(player),
            frames,
            video: None,
            background,
            config,
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(ui::PANEL_BG)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                ui.vertical_centered(|ui| {
                    ui.label(ui::white("Calculate Magnitude").size(16.0));
                });
                ui.add_space(6.0);

                for soil in SoilType::ALL {
                    ui.checkbox(
                        self.seismograph.selection.get_mut(soil),
                        ui::white(soil.label()),
                    );
                }
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui.button("Generate earthquake").clicked() {
                        self.seismograph.generate();
                    }
                    if ui.button("Calculate Magnitude").clicked() {
                        // Refusals are rendered through result_text.
                        let _ = self.seismograph.calculate();
                    }
                    if ui.button("Clear").clicked() {
                        self.seismograph.clear();
                        self.video = None;
                    }
                });
                ui.add_space(6.0);

                ui.vertical_centered(|ui| {
                    ui.label(ui::white(self.seismograph.amplitude_text()));
                    ui.add_space(6.0);
                    ui.label(ui::white(self.seismograph.result_text()));
                });
            });
    }

    fn refresh_video(&mut self, ctx: &egui::Context) {
        if let Some(frame) = self.frames.take() {
            let size = [frame.width() as usize, frame.height() as usize];
            let image = ColorImage::from_rgb(size, frame.pixels());
            match &mut self.video {
                Some(texture) => texture.set(image, TextureOptions::LINEAR),
                None => self.video = Some(ctx.load_texture("video", image, TextureOptions::LINEAR)),
            }
        }
        if self.seismograph.is_playing() {
            ctx.request_repaint_after(self.config.playback.frame_delay);
        }
    }
}

impl eframe::App for SeismographApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_video(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ui::BACKDROP))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                if let Some(background) = &self.background {
                    ui.painter()
                        .image(background.id(), area, ui::FULL_UV, egui::Color32::WHITE);
                }
                let place = |x: f32, y: f32, w: f32, h: f32| {
                    Rect::from_min_size(area.min + egui::vec2(x, y), egui::vec2(w, h))
                };

                ui.scope_builder(UiBuilder::new().max_rect(place(20.0, 20.0, 400.0, 300.0)), |ui| {
                    self.draw_controls(ui);
                });
                ui.scope_builder(UiBuilder::new().max_rect(place(450.0, 40.0, 380.0, 120.0)), |ui| {
                    ui::instructions(ui);
                });
                ui.scope_builder(UiBuilder::new().max_rect(place(450.0, 180.0, 380.0, 140.0)), |ui| {
                    ui::outcome_table(ui, self.seismograph.last_outcome());
                });

                let playback = self.config.playback;
                let (w, h) = (playback.display_width as f32, playback.display_height as f32);
                ui.scope_builder(UiBuilder::new().max_rect(place(20.0, 330.0, w, h)), |ui| {
                    ui::video_canvas(ui, self.video.as_ref(), egui::vec2(w, h));
                });
            });
    }
}

fn load_background(ctx: &egui::Context, config: &SeismographConfig) -> Option<TextureHandle> {
    let path = &config.background_image;
    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            warn!("could not load background {}: {e}", path.display());
            return None;
        }
    };
    let (width, height) = (config.window_width, config.window_height);
    let rgba = image
        .resize_exact(width, height, image::imageops::FilterType::Lanczos3)
        .to_rgba8();
    let color_image =
        ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba.as_raw());
    info!(path = %path.display(), "loaded background");
    Some(ctx.load_texture("background", color_image, TextureOptions::LINEAR))
}
