//! Static eframe/egui view of a recorded fractal tree.
//!
//! [`Viewer`] owns the strokes produced by the renderer and paints them
//! into the central panel each frame. Nothing is interactive.

use eframe::App;
use fractal_core::{surface::Stroke, types::Point};

/// Identifier the canvas window is created under.
pub const CANVAS_ID: &str = "canvas";

/// Logical size of the drawing surface the tree coordinates refer to.
pub const CANVAS_SIZE: egui::Vec2 = egui::Vec2::new(600.0, 650.0);

const INK: egui::Color32 = egui::Color32::BLACK;
const PAPER: egui::Color32 = egui::Color32::WHITE;

/// Application state: the finished strokes, in drawing order.
pub struct Viewer {
    strokes: Vec<Stroke>,
}

impl Viewer {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Scale that fits the whole canvas inside `rect` without distortion.
    fn canvas_scale(rect: egui::Rect) -> f32 {
        (rect.width() / CANVAS_SIZE.x).min(rect.height() / CANVAS_SIZE.y)
    }

    /// Converts a canvas position to screen-space.
    ///
    /// Both spaces have y pointing down, so only a uniform scale and the
    /// offset of `rect`'s top-left corner are applied.
    fn canvas_to_screen(p: Point, rect: egui::Rect) -> egui::Pos2 {
        let scale = Self::canvas_scale(rect);
        egui::pos2(
            rect.min.x + p.x as f32 * scale,
            rect.min.y + p.y as f32 * scale,
        )
    }

    fn stroke_shape(stroke: &Stroke, rect: egui::Rect) -> egui::Shape {
        let points: Vec<egui::Pos2> = stroke
            .points
            .iter()
            .map(|&p| Self::canvas_to_screen(p, rect))
            .collect();
        let pen = egui::Stroke::new(stroke.width as f32 * Self::canvas_scale(rect), INK);

        if stroke.closed {
            egui::Shape::closed_line(points, pen)
        } else {
            egui::Shape::line(points, pen)
        }
    }

    /// Builds the bottom status bar (stroke count).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("segments = {}", self.strokes.len()));
            });
        });
    }

    /// Builds the central panel and paints every stroke in order.
    fn ui_central_panel(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(PAPER))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Later strokes land on top.
                painter.extend(self.strokes.iter().map(|s| Self::stroke_shape(s, rect)));
            });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
