use std::sync::Arc;
use std::time::Instant;

use eframe::egui;
use tracing::warn;

use digit_scope::{AppConfig, DrawingGrid, Network, PredictionState, Predictor, Ticker};

pub struct ScopeApp {
    config: AppConfig,
    grid: DrawingGrid,
    predictor: Predictor<Network>,
    ticker: Ticker,
    diagram: Option<egui::TextureHandle>,
    status: String,
}

impl ScopeApp {
    pub fn new(model: Arc<Network>, config: AppConfig) -> Self {
        let grid = DrawingGrid::new(config.grid_size, config.stroke, config.neighbor);
        let predictor = Predictor::new(model, &grid);
        let ticker = Ticker::new(config.poll_interval());
        ScopeApp {
            config,
            grid,
            predictor,
            ticker,
            diagram: None,
            status: "Draw a digit".into(),
        }
    }

    fn reset(&mut self) {
        self.grid.reset();
        self.status = "Draw a digit".into();
    }

    /// Uploads a freshly finished diagram, or records why it failed.
    fn absorb_result(&mut self, ctx: &egui::Context) {
        match self.predictor.state() {
            PredictionState::Ready(prediction) => {
                match image::load_from_memory(&prediction.png) {
                    Ok(img) => {
                        let rgba = img.to_rgba8();
                        let size = [rgba.width() as usize, rgba.height() as usize];
                        let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                        self.diagram = Some(ctx.load_texture("diagram", color, egui::TextureOptions::LINEAR));
                        self.status = match prediction.predicted_class {
                            Some(class) => format!("Prediction: {}", class),
                            None => "Prediction: -".into(),
                        };
                    }
                    Err(e) => {
                        warn!(error = %e, "could not decode diagram");
                        self.status = format!("Could not display diagram: {}", e);
                    }
                }
            }
            PredictionState::Failed(reason) => {
                self.status = format!("Error during prediction: {}", reason);
            }
            PredictionState::Idle | PredictionState::Running => {}
        }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let cell = self.config.cell_size;
        let side = self.grid.size() as f32 * cell;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let origin = response.rect.min;

        // Paint on press and on motion, like a brush; holding still adds nothing.
        let stroked = ui.input(|i| i.pointer.any_pressed() || i.pointer.delta() != egui::Vec2::ZERO);
        if response.is_pointer_button_down_on() && stroked {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                if let Some((row, col)) = self.grid.cell_at(local.x, local.y, cell) {
                    self.grid.paint(row, col);
                }
            }
        }

        painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);
        for row in 0..self.grid.size() {
            for col in 0..self.grid.size() {
                let value = self.grid.get(row, col);
                if value <= 0.0 {
                    continue;
                }
                let shade = ((1.0 - value) * 255.0).round() as u8;
                let min = origin + egui::vec2(col as f32 * cell, row as f32 * cell);
                let rect = egui::Rect::from_min_size(min, egui::vec2(cell, cell));
                painter.rect_filled(rect, 0.0, egui::Color32::from_gray(shade));
            }
        }
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.predictor.collect() {
            self.absorb_result(ctx);
        }
        let now = Instant::now();
        if self.ticker.due(now) {
            self.predictor.tick(&self.grid);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });
            });
        });

        egui::SidePanel::left("grid").resizable(false).show(ctx, |ui| {
            self.draw_grid(ui);
            ui.separator();
            ui.label(&self.status);
            if self.predictor.is_running() {
                ui.spinner();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.diagram {
                Some(texture) => {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                }
                None => {
                    ui.label("The activation diagram appears here once you start drawing.");
                }
            }
        });

        ctx.request_repaint_after(self.ticker.until_next(Instant::now()));
    }
}
