//! Edits applied to the buffer behind the active file tab.

use super::buffers::CursorMotion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    InsertText(String),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    MoveCursor(CursorMotion),
}

