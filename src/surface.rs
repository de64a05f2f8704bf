use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

/// How the ends of a stroked path are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// How the corners of a stroked path are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
}

/// Stroke styling shared by every path drawn until it is changed again
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

/// A 2D drawing target in canvas-local coordinates.
///
/// Commands and previews only ever talk to this trait, so the same drawing
/// code paints into an egui frame or into a [`RecordingSurface`] under test.
pub trait Surface {
    /// Wipe the whole drawing area
    fn clear(&mut self);

    fn set_pen(&mut self, pen: Pen);

    fn pen(&self) -> Pen;

    /// Stroke a connected path through `points` with the current pen
    fn stroke_path(&mut self, points: &[Pos2], width: f32);

    /// Fill and outline a circle
    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: EguiStroke);

    /// Draw text centered on `center`. `opacity` is in `0.0..=1.0`.
    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, opacity: f32);
}

/// Draws onto an egui [`Painter`], offsetting canvas coordinates by the
/// top-left corner of the canvas rectangle.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    pen: Pen,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            pen: Pen::default(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn pen(&self) -> Pen {
        self.pen
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32) {
        // A lone moveTo strokes nothing, same as a 2D canvas context
        if points.len() < 2 {
            return;
        }

        let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        let radius = width / 2.0;

        self.painter.add(egui::Shape::line(
            screen_points.clone(),
            EguiStroke::new(width, self.pen.color),
        ));

        // egui tessellates paths with square ends; discs on the vertices give
        // round joins and caps
        if self.pen.join == LineJoin::Round {
            for p in &screen_points[1..screen_points.len() - 1] {
                self.painter.circle_filled(*p, radius, self.pen.color);
            }
        }
        if self.pen.cap == LineCap::Round {
            for p in [screen_points[0], screen_points[screen_points.len() - 1]] {
                self.painter.circle_filled(p, radius, self.pen.color);
            }
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: EguiStroke) {
        self.painter
            .circle(self.to_screen(center), radius, fill, outline);
    }

    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, opacity: f32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            Color32::BLACK.gamma_multiply(opacity),
        );
    }
}

/// One primitive recorded by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    SetPen(Pen),
    StrokePath {
        points: Vec<Pos2>,
        width: f32,
        pen: Pen,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        outline: EguiStroke,
    },
    FillText {
        text: String,
        center: Pos2,
        size: f32,
        opacity: f32,
    },
}

/// Surface that keeps a log of what would have been drawn since the last
/// clear. Two frames painted from the same state compare equal.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    pen: Pen,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded stroked paths, in drawing order
    pub fn paths(&self) -> Vec<&[Pos2]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokePath { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Recorded text draws as `(text, center, opacity)`, in drawing order
    pub fn texts(&self) -> Vec<(&str, Pos2, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText {
                    text,
                    center,
                    opacity,
                    ..
                } => Some((text.as_str(), *center, *opacity)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
        self.ops.push(DrawOp::SetPen(pen));
    }

    fn pen(&self) -> Pen {
        self.pen
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32) {
        self.ops.push(DrawOp::StrokePath {
            points: points.to_vec(),
            width,
            pen: self.pen,
        });
    }

    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: EguiStroke) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
            outline,
        });
    }

    fn fill_text(&mut self, text: &str, center: Pos2, size: f32, opacity: f32) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            center,
            size,
            opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    #[test]
    fn test_recording_clear_resets_log() {
        let mut surface = RecordingSurface::new();
        surface.stroke_path(&[Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)], 2.0);
        surface.clear();
        assert_eq!(surface.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_recording_captures_current_pen() {
        let mut surface = RecordingSurface::new();
        let pen = Pen {
            color: Color32::RED,
            cap: LineCap::Round,
            join: LineJoin::Round,
        };
        surface.set_pen(pen);
        surface.stroke_path(&[Pos2::ZERO], 3.0);

        match surface.ops().last() {
            Some(DrawOp::StrokePath { pen: recorded, width, .. }) => {
                assert_eq!(*recorded, pen);
                assert_eq!(*width, 3.0);
            }
            other => panic!("expected a stroked path, got {:?}", other),
        }
    }

    #[test]
    fn test_painter_surface_accepts_primitives() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(256.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let mut surface = PainterSurface::new(&painter, rect, Color32::WHITE);

        surface.clear();
        surface.stroke_path(&[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)], 2.0);
        surface.circle(Pos2::new(3.0, 3.0), 2.0, Color32::BLACK, EguiStroke::NONE);
        assert_eq!(surface.to_screen(Pos2::new(1.0, 2.0)), Pos2::new(11.0, 12.0));
    }
}
