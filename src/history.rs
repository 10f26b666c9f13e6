use crate::segment::Segment;

/// Manages the committed segments and the redo stack for undo/redo.
pub struct History {
    /// Committed segments, oldest first. Replaying these in order
    /// reproduces the full drawing at any zoom.
    committed: Vec<Segment>,
    /// Segments removed by undo, most recently undone last.
    redo_stack: Vec<Segment>,
}

impl History {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Append a newly confirmed segment. Any segments eligible for
    /// redo are superseded and dropped.
    pub fn commit(&mut self, segment: Segment) {
        self.committed.push(segment);
        self.redo_stack.clear();
    }

    /// Undo the most recent commit. Returns false if there was nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(segment) = self.committed.pop() {
            self.redo_stack.push(segment);
            true
        } else {
            false
        }
    }

    /// Re-apply the most recently undone segment. Returns false if the
    /// redo stack is empty.
    pub fn redo(&mut self) -> bool {
        if let Some(segment) = self.redo_stack.pop() {
            self.committed.push(segment);
            true
        } else {
            false
        }
    }

    /// Returns true if there are segments that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are segments that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The committed segments in commit order.
    pub fn committed(&self) -> &[Segment] {
        &self.committed
    }

    /// Clear both stacks. Invoked when a new image replaces the session.
    pub fn reset(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
