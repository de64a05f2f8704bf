use egui::{Color32, Rect, Sense, Stroke, Vec2};

use crate::SketchApp;
use crate::input::route_event;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Sketchpad");
            ui.add_space(12.0);

            let size = Vec2::splat(app.config().canvas_size);
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            let canvas_rect: Rect = response.rect;

            // The prompt blocks canvas input until it is answered
            if app.is_prompt_open() {
                app.input_mut().reset();
            } else {
                let events = app.input_mut().process_input(ctx, canvas_rect);
                for event in &events {
                    route_event(event, app.sketchpad_mut());
                }
            }

            let mut surface = PainterSurface::new(&painter, canvas_rect, Color32::WHITE);
            app.renderer().repaint(&mut surface, app.sketchpad());
            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::GRAY));

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    });
}
