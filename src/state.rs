use egui::Pos2;

use crate::command::CommandId;

/// Where the pointer is and whether it is currently drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub active: bool,
    pub position: Pos2,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            active: false,
            position: Pos2::ZERO,
        }
    }
}

/// Pointer state machine of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Pointer is up; the preview follows it
    #[default]
    Idle,
    /// Pointer is down and `command` follows it
    Drawing { command: CommandId },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}
