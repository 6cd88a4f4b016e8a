use crate::kernel::EditorAction;

impl super::Store {
    /// Applies an edit to the active file's buffer; a no-op without one.
    pub(super) fn reduce_editor_action(&mut self, action: EditorAction) -> super::DispatchResult {
        let Some(id) = self.state.tabs.active_file() else {
            return super::DispatchResult::changed(false);
        };
        if !self.state.tree.is_file(id) {
            return super::DispatchResult::changed(false);
        }

        let buffer = self.state.buffers.ensure(id);
        let changed = match action {
            EditorAction::InsertChar(ch) => {
                buffer.insert_char(ch);
                true
            }
            EditorAction::InsertText(text) => {
                let changed = !text.is_empty();
                buffer.insert_str(&text);
                changed
            }
            EditorAction::InsertNewline => {
                buffer.insert_char('\n');
                true
            }
            EditorAction::DeleteBackward => buffer.delete_backward(),
            EditorAction::DeleteForward => buffer.delete_forward(),
            EditorAction::MoveCursor(motion) => buffer.move_cursor(motion),
        };

        super::DispatchResult::changed(changed)
    }
}
