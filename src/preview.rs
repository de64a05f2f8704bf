use egui::{Color32, Pos2, Stroke as EguiStroke};

use crate::surface::Surface;

/// The preview circle never shrinks below this, so the thinnest marker is
/// still visible under the pointer
pub const MIN_PREVIEW_RADIUS: f32 = 2.0;

/// Opacity of a sticker that has not been placed yet
pub const STICKER_PREVIEW_OPACITY: f32 = 0.75;

/// Translucent indicator of where the next mark would land. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    Circle {
        position: Pos2,
        thickness: f32,
    },
    Sticker {
        position: Pos2,
        glyph: String,
        size: f32,
    },
}

impl ToolPreview {
    pub fn circle(position: Pos2, thickness: f32) -> Self {
        Self::Circle {
            position,
            thickness,
        }
    }

    pub fn sticker(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Self::Sticker {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            Self::Circle { position, .. } | Self::Sticker { position, .. } => *position,
        }
    }

    /// Radius of the marker preview for a given thickness
    pub fn circle_radius(thickness: f32) -> f32 {
        thickness.max(MIN_PREVIEW_RADIUS)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Circle {
                position,
                thickness,
            } => {
                surface.circle(
                    *position,
                    Self::circle_radius(*thickness),
                    Color32::from_black_alpha(20),
                    EguiStroke::new(1.0, Color32::from_black_alpha(153)),
                );
            }
            Self::Sticker {
                position,
                glyph,
                size,
            } => {
                if glyph.is_empty() {
                    return;
                }
                surface.fill_text(glyph, *position, *size, STICKER_PREVIEW_OPACITY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_circle_radius_has_floor() {
        assert_eq!(ToolPreview::circle_radius(0.5), MIN_PREVIEW_RADIUS);
        assert_eq!(ToolPreview::circle_radius(4.0), 4.0);
        assert!(ToolPreview::circle_radius(4.0) > ToolPreview::circle_radius(2.0));
    }

    #[test]
    fn test_circle_is_translucent() {
        let mut surface = RecordingSurface::new();
        ToolPreview::circle(Pos2::new(5.0, 5.0), 2.0).render(&mut surface);

        match surface.ops() {
            [DrawOp::Circle { center, fill, outline, .. }] => {
                assert_eq!(*center, Pos2::new(5.0, 5.0));
                assert!(fill.a() < 255);
                assert!(outline.color.a() < 255);
            }
            other => panic!("unexpected ops: {:?}", other),
        }
    }

    #[test]
    fn test_sticker_preview_is_faded() {
        let mut surface = RecordingSurface::new();
        ToolPreview::sticker(Pos2::new(8.0, 9.0), "🍜", 36.0).render(&mut surface);
        assert_eq!(
            surface.texts(),
            vec![("🍜", Pos2::new(8.0, 9.0), STICKER_PREVIEW_OPACITY)]
        );
    }

    #[test]
    fn test_empty_glyph_draws_nothing() {
        let mut surface = RecordingSurface::new();
        ToolPreview::sticker(Pos2::ZERO, "", 36.0).render(&mut surface);
        assert!(surface.ops().is_empty());
    }
}
