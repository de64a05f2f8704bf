use egui::Pos2;

use crate::command::{CommandHistory, Drawable};
use crate::config::SketchConfig;
use crate::preview::ToolPreview;
use crate::state::{Cursor, EditorState};
use crate::tools::ToolState;

/// Change notification raised by every mutation. Whoever owns the
/// [`Sketchpad`] drains these and repaints.
///
/// Both variants mean "repaint". The split only tells the log whether
/// committed marks changed or just the tool and its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Committed marks changed
    DrawingChanged,
    /// Only the tool or its preview changed
    ToolMoved,
}

/// All state of one sketchpad: committed marks, tool selection, pointer and
/// preview. Every handler runs to completion and queues a [`SketchEvent`].
#[derive(Debug)]
pub struct Sketchpad {
    history: CommandHistory,
    tools: ToolState,
    cursor: Cursor,
    state: EditorState,
    preview: Option<ToolPreview>,
    events: Vec<SketchEvent>,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            history: CommandHistory::new(),
            tools: ToolState::new(config),
            cursor: Cursor::default(),
            state: EditorState::Idle,
            preview: None,
            events: Vec::new(),
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// Drain the change notifications raised since the last call
    pub fn take_events(&mut self) -> Vec<SketchEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, event: SketchEvent) {
        self.events.push(event);
    }

    /// Preview for the current tool at the last known pointer position
    fn refresh_preview(&mut self) {
        self.preview = if self.state.is_drawing() {
            None
        } else {
            self.tools.preview_at(self.cursor.position)
        };
    }

    // ---- pointer input ----

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.state.is_drawing() {
            log::debug!("Ignoring press at {:?}: already drawing", pos);
            return;
        }

        let Some(command) = self.tools.new_command(pos) else {
            log::debug!("Ignoring press at {:?}: no sticker selected", pos);
            return;
        };

        let id = command.id();
        self.history.commit(command);
        self.state = EditorState::Drawing { command: id };
        self.cursor = Cursor {
            active: true,
            position: pos,
        };
        self.preview = None;
        self.notify(SketchEvent::DrawingChanged);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.cursor.position = pos;

        match self.state {
            EditorState::Drawing { command } => {
                // The mark may have been undone or cleared mid-drag
                match self.history.last_mut() {
                    Some(last) if last.id() == command => {
                        last.extend(pos);
                        self.notify(SketchEvent::DrawingChanged);
                    }
                    _ => log::debug!("No active mark to extend at {:?}", pos),
                }
            }
            EditorState::Idle => {
                self.preview = self.tools.preview_at(pos);
                self.notify(SketchEvent::ToolMoved);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        if let EditorState::Drawing { command } = self.state {
            log::debug!("Finished {:?}", command);
        }
        self.state = EditorState::Idle;
        self.cursor.active = false;
        self.refresh_preview();
        self.notify(SketchEvent::DrawingChanged);
    }

    /// Pointer left the canvas. Ends any stroke in progress and hides the
    /// preview.
    pub fn pointer_leave(&mut self) {
        if self.state.is_drawing() {
            self.state = EditorState::Idle;
            self.cursor.active = false;
        }
        self.preview = None;
        self.notify(SketchEvent::ToolMoved);
    }

    // ---- tool selection ----

    pub fn select_thin(&mut self) {
        log::info!("Tool selected: thin marker");
        self.tools.select_thin();
        self.refresh_preview();
        self.notify(SketchEvent::ToolMoved);
    }

    pub fn select_thick(&mut self) {
        log::info!("Tool selected: thick marker");
        self.tools.select_thick();
        self.refresh_preview();
        self.notify(SketchEvent::ToolMoved);
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        log::info!("Tool selected: sticker {}", glyph);
        self.tools.select_sticker(glyph);
        self.refresh_preview();
        self.notify(SketchEvent::ToolMoved);
    }

    /// Answer to the custom sticker prompt. `None` means the prompt was
    /// cancelled; blank text is treated the same way.
    pub fn add_custom_sticker(&mut self, text: Option<&str>) {
        let Some(text) = text else {
            log::debug!("Custom sticker prompt cancelled");
            return;
        };
        if !self.tools.add_custom_sticker(text) {
            log::debug!("Ignoring blank custom sticker");
            return;
        }
        log::info!("Added custom sticker {}", text);
        self.refresh_preview();
        self.notify(SketchEvent::ToolMoved);
    }

    // ---- history ----

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.notify(SketchEvent::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.notify(SketchEvent::DrawingChanged);
        }
    }

    pub fn clear(&mut self) {
        log::info!("Clearing {} marks", self.history.commands().len());
        self.history.clear();
        self.notify(SketchEvent::DrawingChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditorState;

    #[test]
    fn test_press_hides_preview_and_release_restores_it() {
        let mut pad = Sketchpad::default();
        pad.pointer_move(Pos2::new(3.0, 4.0));
        assert!(pad.preview().is_some());

        pad.pointer_down(Pos2::new(3.0, 4.0));
        assert!(pad.state().is_drawing());
        assert!(pad.preview().is_none());

        pad.pointer_move(Pos2::new(9.0, 9.0));
        assert!(pad.preview().is_none());

        pad.pointer_up();
        assert_eq!(pad.state(), EditorState::Idle);
        assert_eq!(
            pad.preview(),
            Some(&ToolPreview::circle(Pos2::new(9.0, 9.0), 2.0))
        );
    }

    #[test]
    fn test_sticker_press_without_glyph_keeps_redo() {
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(1.0, 1.0));
        pad.pointer_up();
        pad.undo();
        pad.tools.set_kind(crate::tools::ToolKind::Sticker);
        pad.take_events();

        pad.pointer_down(Pos2::new(2.0, 2.0));
        assert_eq!(pad.state(), EditorState::Idle);
        assert!(pad.history().commands().is_empty());
        assert_eq!(pad.history().redo_stack().len(), 1);
        assert!(pad.take_events().is_empty());
    }

    #[test]
    fn test_leave_clears_preview() {
        let mut pad = Sketchpad::default();
        pad.pointer_move(Pos2::new(3.0, 4.0));
        pad.pointer_leave();
        assert!(pad.preview().is_none());
        assert_eq!(pad.take_events().last(), Some(&SketchEvent::ToolMoved));
    }

    #[test]
    fn test_leave_while_drawing_ends_stroke() {
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(1.0, 1.0));
        pad.pointer_leave();
        assert_eq!(pad.state(), EditorState::Idle);
        assert!(!pad.cursor().active);
        assert_eq!(pad.history().commands().len(), 1);
    }

    #[test]
    fn test_move_after_undo_mid_drag_is_noop() {
        let mut pad = Sketchpad::default();
        pad.pointer_down(Pos2::new(0.0, 0.0));
        pad.pointer_up();
        pad.pointer_down(Pos2::new(5.0, 5.0));
        pad.undo();
        pad.take_events();

        pad.pointer_move(Pos2::new(7.0, 7.0));
        let first = pad.history().commands()[0].as_line().map(|l| l.points().len());
        assert_eq!(first, Some(1));
        assert!(pad.take_events().is_empty());
    }

    #[test]
    fn test_selection_updates_preview_without_moving() {
        let mut pad = Sketchpad::default();
        pad.pointer_move(Pos2::new(20.0, 20.0));

        pad.select_sticker("🥟");
        assert_eq!(
            pad.preview(),
            Some(&ToolPreview::sticker(Pos2::new(20.0, 20.0), "🥟", 36.0))
        );

        pad.select_thick();
        assert_eq!(
            pad.preview(),
            Some(&ToolPreview::circle(Pos2::new(20.0, 20.0), 4.0))
        );
        assert_eq!(pad.preview().map(|p| p.position()), Some(pad.cursor().position));
    }

    #[test]
    fn test_noop_history_actions_raise_nothing() {
        let mut pad = Sketchpad::default();
        pad.undo();
        pad.redo();
        pad.add_custom_sticker(None);
        pad.add_custom_sticker(Some("  "));
        assert!(pad.take_events().is_empty());
    }
}
