use super::{Command, Drawable};

/// Owns every committed mark, plus the marks that were undone and can still
/// be redone.
///
/// Committing a new mark discards the redo stack, so history never branches.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Committed marks, oldest first
    undo_stack: Vec<Command>,
    /// Undone marks; the most recently undone one is last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Append a mark and drop everything that could have been redone
    pub fn commit(&mut self, command: Command) {
        log::debug!(
            "Commit {} {:?} (discarding {} redo entries)",
            command.label(),
            command.id(),
            self.redo_stack.len()
        );
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Move the last committed mark onto the redo stack. Returns false if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone mark back. Returns false if there was
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Committed marks in painting order
    pub fn commands(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    /// The mark that is still following the pointer, if any
    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.undo_stack.last_mut()
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
