use egui::Color32;

use crate::command::Drawable;
use crate::sketchpad::Sketchpad;
use crate::surface::{LineCap, LineJoin, Pen, Surface};

/// Repaints the whole canvas from scratch on every call
#[derive(Debug, Clone)]
pub struct Renderer {
    pen: Pen,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

impl Renderer {
    pub fn new(stroke_color: Color32) -> Self {
        Self {
            pen: Pen {
                color: stroke_color,
                cap: LineCap::Round,
                join: LineJoin::Round,
            },
        }
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Clear `surface`, paint every committed mark oldest first, then the
    /// preview on top unless the pointer is drawing.
    ///
    /// Painting the same sketchpad twice produces the same output.
    pub fn repaint(&self, surface: &mut dyn Surface, sketchpad: &Sketchpad) {
        surface.clear();
        surface.set_pen(self.pen);

        for command in sketchpad.history().commands() {
            command.render(surface);
        }

        if !sketchpad.cursor().active {
            if let Some(preview) = sketchpad.preview() {
                preview.render(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use egui::Pos2;

    #[test]
    fn test_repaint_empty_canvas() {
        let renderer = Renderer::default();
        let pad = Sketchpad::default();
        let mut surface = RecordingSurface::new();

        renderer.repaint(&mut surface, &pad);
        assert_eq!(
            surface.ops(),
            &[DrawOp::Clear, DrawOp::SetPen(renderer.pen())]
        );
        assert_eq!(surface.pen(), renderer.pen());
    }

    #[test]
    fn test_preview_painted_last() {
        let renderer = Renderer::default();
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(1.0, 1.0));
        pad.pointer_move(Pos2::new(2.0, 2.0));
        pad.pointer_up();
        pad.select_sticker("🍙");
        pad.pointer_down(Pos2::new(40.0, 40.0));
        pad.pointer_up();
        pad.pointer_move(Pos2::new(80.0, 80.0));

        let mut surface = RecordingSurface::new();
        renderer.repaint(&mut surface, &pad);

        let ops = surface.ops();
        assert!(matches!(ops[2], DrawOp::StrokePath { .. }));
        assert!(matches!(&ops[3], DrawOp::FillText { opacity, .. } if *opacity == 1.0));
        assert!(matches!(&ops[4], DrawOp::FillText { opacity, .. } if *opacity < 1.0));
        assert_eq!(ops.len(), 5);
    }

    #[test]
    fn test_no_preview_while_drawing() {
        let renderer = Renderer::default();
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(1.0, 1.0));
        pad.pointer_move(Pos2::new(3.0, 1.0));

        let mut surface = RecordingSurface::new();
        renderer.repaint(&mut surface, &pad);
        assert!(
            !surface
                .ops()
                .iter()
                .any(|op| matches!(op, DrawOp::Circle { .. }))
        );
    }

    #[test]
    fn test_strokes_use_round_black_pen() {
        let renderer = Renderer::default();
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(1.0, 1.0));

        let mut surface = RecordingSurface::new();
        renderer.repaint(&mut surface, &pad);
        match &surface.ops()[2] {
            DrawOp::StrokePath { pen, width, .. } => {
                assert_eq!(pen.color, Color32::BLACK);
                assert_eq!(pen.cap, LineCap::Round);
                assert_eq!(pen.join, LineJoin::Round);
                assert_eq!(*width, 2.0);
            }
            other => panic!("expected a stroked path, got {:?}", other),
        }
    }
}
