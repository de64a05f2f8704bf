use egui::Pos2;

use super::{CommandId, Drawable};
use crate::id_generator::generate_id;
use crate::surface::Surface;

/// Freehand line drawn with the marker tool
#[derive(Debug, PartialEq)]
pub struct MarkerLine {
    id: CommandId,
    points: Vec<Pos2>,
    thickness: f32,
}

impl MarkerLine {
    /// Start a new line at `start`
    pub fn new(start: Pos2, thickness: f32) -> Self {
        Self {
            id: generate_id(),
            points: vec![start],
            thickness,
        }
    }

    /// Get the points that make up this line, start first
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Drawable for MarkerLine {
    fn id(&self) -> CommandId {
        self.id
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.points.is_empty() {
            return;
        }
        surface.stroke_path(&self.points, self.thickness);
    }

    fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }
}
