use egui::Pos2;

use crate::surface::Surface;

mod history;
mod marker_line;
mod sticker;

pub use history::CommandHistory;
pub use marker_line::MarkerLine;
pub use sticker::StickerMark;

/// Identifies one committed mark for as long as the process lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub usize);

/// Common trait that all committed marks implement
pub trait Drawable {
    /// Get the unique identifier for this mark
    fn id(&self) -> CommandId;

    /// Draw the mark. May be called any number of times.
    fn render(&self, surface: &mut dyn Surface);

    /// Follow the pointer while it is still held down after the mark was
    /// created
    fn extend(&mut self, pos: Pos2);
}

/// A committed mark on the canvas
#[derive(Debug, PartialEq)]
pub enum Command {
    Line(MarkerLine),
    Sticker(StickerMark),
}

impl Command {
    pub fn line(start: Pos2, thickness: f32) -> Self {
        Command::Line(MarkerLine::new(start, thickness))
    }

    pub fn sticker(position: Pos2, glyph: impl Into<String>, size: f32) -> Self {
        Command::Sticker(StickerMark::new(position, glyph, size))
    }

    /// Short label for history listings and logs
    pub fn label(&self) -> &'static str {
        match self {
            Command::Line(_) => "Line",
            Command::Sticker(_) => "Sticker",
        }
    }

    pub fn as_line(&self) -> Option<&MarkerLine> {
        match self {
            Command::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            Command::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl Drawable for Command {
    fn id(&self) -> CommandId {
        match self {
            Command::Line(line) => line.id(),
            Command::Sticker(sticker) => sticker.id(),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Line(line) => line.render(surface),
            Command::Sticker(sticker) => sticker.render(surface),
        }
    }

    fn extend(&mut self, pos: Pos2) {
        match self {
            Command::Line(line) => line.extend(pos),
            Command::Sticker(sticker) => sticker.extend(pos),
        }
    }
}
