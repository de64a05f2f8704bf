use egui::Pos2;

use super::{CommandId, Drawable};
use crate::id_generator::generate_id;
use crate::surface::Surface;

/// A glyph stamped onto the canvas with the sticker tool
#[derive(Debug, PartialEq)]
pub struct StickerMark {
    id: CommandId,
    position: Pos2,
    glyph: String,
    size: f32,
}

impl StickerMark {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            id: generate_id(),
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Drawable for StickerMark {
    fn id(&self) -> CommandId {
        self.id
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_text(&self.glyph, self.position, self.size, 1.0);
    }

    // Dragging a sticker moves it instead of leaving a trail
    fn extend(&mut self, pos: Pos2) {
        self.position = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_last_reposition_wins() {
        let mut sticker = StickerMark::new(Pos2::new(50.0, 50.0), "🍙", 36.0);
        sticker.extend(Pos2::new(55.0, 52.0));
        sticker.extend(Pos2::new(60.0, 60.0));
        assert_eq!(sticker.position(), Pos2::new(60.0, 60.0));
        assert_eq!(sticker.glyph(), "🍙");
    }

    #[test]
    fn test_render_is_opaque_and_centered() {
        let sticker = StickerMark::new(Pos2::new(20.0, 30.0), "🥟", 36.0);
        let mut surface = RecordingSurface::new();
        sticker.render(&mut surface);
        assert_eq!(surface.texts(), vec![("🥟", Pos2::new(20.0, 30.0), 1.0)]);
    }
}
