use egui::Pos2;

use crate::command::Command;
use crate::config::SketchConfig;
use crate::preview::ToolPreview;

/// Which kind of mark a pointer press creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Marker,
    Sticker,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Marker => "Marker",
            Self::Sticker => "Sticker",
        }
    }
}

/// Current tool selection plus the list of stickers the user can pick from.
///
/// Selection changes are not undoable; only marks go through history.
#[derive(Debug, Clone)]
pub struct ToolState {
    kind: ToolKind,
    thickness: f32,
    selected_sticker: Option<String>,
    stickers: Vec<String>,
    thin_thickness: f32,
    thick_thickness: f32,
    sticker_size: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl ToolState {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            kind: ToolKind::Marker,
            thickness: config.thin_thickness,
            selected_sticker: None,
            stickers: config.stickers.clone(),
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            sticker_size: config.sticker_size,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn selected_sticker(&self) -> Option<&str> {
        self.selected_sticker.as_deref()
    }

    /// Available stickers in the order they were added. May hold duplicates.
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    /// Switch to the marker with the given thickness. Drops any sticker
    /// selection.
    pub fn select_marker(&mut self, thickness: f32) {
        self.kind = ToolKind::Marker;
        self.thickness = thickness;
        self.selected_sticker = None;
    }

    pub fn select_thin(&mut self) {
        self.select_marker(self.thin_thickness);
    }

    pub fn select_thick(&mut self) {
        self.select_marker(self.thick_thickness);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        self.kind = ToolKind::Sticker;
        self.selected_sticker = Some(glyph.to_owned());
    }

    /// Add a user-supplied sticker and select it. Blank input is ignored and
    /// leaves the selection untouched; returns whether anything was added.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.stickers.push(text.to_owned());
        self.select_sticker(text);
        true
    }

    pub fn is_thin_selected(&self) -> bool {
        self.kind == ToolKind::Marker && self.thickness == self.thin_thickness
    }

    pub fn is_thick_selected(&self) -> bool {
        self.kind == ToolKind::Marker && self.thickness == self.thick_thickness
    }

    pub fn is_sticker_selected(&self, glyph: &str) -> bool {
        self.kind == ToolKind::Sticker && self.selected_sticker.as_deref() == Some(glyph)
    }

    /// The mark a press at `pos` would start, or `None` when the sticker tool
    /// has nothing selected
    pub fn new_command(&self, pos: Pos2) -> Option<Command> {
        match (self.kind, &self.selected_sticker) {
            (ToolKind::Marker, _) => Some(Command::line(pos, self.thickness)),
            (ToolKind::Sticker, Some(glyph)) => {
                Some(Command::sticker(pos, glyph.as_str(), self.sticker_size))
            }
            (ToolKind::Sticker, None) => None,
        }
    }

    /// The preview to show at `pos` for the current selection
    pub fn preview_at(&self, pos: Pos2) -> Option<ToolPreview> {
        match (self.kind, &self.selected_sticker) {
            (ToolKind::Marker, _) => Some(ToolPreview::circle(pos, self.thickness)),
            (ToolKind::Sticker, Some(glyph)) => {
                Some(ToolPreview::sticker(pos, glyph.as_str(), self.sticker_size))
            }
            (ToolKind::Sticker, None) => None,
        }
    }
}

#[cfg(test)]
impl ToolState {
    /// Force a tool kind without touching the sticker selection
    pub(crate) fn set_kind(&mut self, kind: ToolKind) {
        self.kind = kind;
    }
}
