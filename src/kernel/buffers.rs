//! Text buffers of the open project, keyed by node id.

use crate::models::NodeId;
use ropey::Rope;
use rustc_hash::FxHashMap;

pub fn new_file_template(extension: &str) -> String {
    format!("// New {extension} file\n// Start coding here...")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMotion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    FileStart,
    FileEnd,
}

#[derive(Debug, Clone)]
pub struct Buffer {
    rope: Rope,
    /// Char index into `rope`.
    cursor: usize,
    version: u64,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
            version: 0,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        let col = self.cursor - self.rope.line_to_char(line);
        (line, col)
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.cursor.min(self.rope.len_chars());
        self.bump();
    }

    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.bump();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.bump();
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.bump();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(self.cursor..self.cursor + 1);
        self.bump();
        true
    }

    pub fn move_cursor(&mut self, motion: CursorMotion) -> bool {
        let prev = self.cursor;
        let (line, col) = self.cursor_line_col();
        self.cursor = match motion {
            CursorMotion::Left => self.cursor.saturating_sub(1),
            CursorMotion::Right => (self.cursor + 1).min(self.rope.len_chars()),
            CursorMotion::Up if line > 0 => self.char_at(line - 1, col),
            CursorMotion::Up => 0,
            CursorMotion::Down if line + 1 < self.rope.len_lines() => self.char_at(line + 1, col),
            CursorMotion::Down => self.rope.len_chars(),
            CursorMotion::LineStart => self.rope.line_to_char(line),
            CursorMotion::LineEnd => self.char_at(line, usize::MAX),
            CursorMotion::FileStart => 0,
            CursorMotion::FileEnd => self.rope.len_chars(),
        };
        self.cursor != prev
    }

    fn char_at(&self, line: usize, col: usize) -> usize {
        self.rope.line_to_char(line) + col.min(self.line_len(line))
    }

    /// Line length in chars, excluding the line break.
    pub fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[derive(Debug, Clone, Default)]
pub struct BufferStore {
    buffers: FxHashMap<NodeId, Buffer>,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.buffers.contains_key(&id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Buffer> {
        self.buffers.get(&id)
    }

    pub fn text(&self, id: NodeId) -> Option<String> {
        self.buffers.get(&id).map(Buffer::text)
    }

    /// Overwrites (or creates) the content of `id`.
    pub fn set_content(&mut self, id: NodeId, text: &str) {
        match self.buffers.get_mut(&id) {
            Some(buffer) => buffer.set_text(text),
            None => {
                self.buffers.insert(id, Buffer::new(text));
            }
        }
    }

    /// Returns the buffer for `id`, creating an empty one on first use.
    pub fn ensure(&mut self, id: NodeId) -> &mut Buffer {
        self.buffers.entry(id).or_insert_with(|| Buffer::new(""))
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Buffer> {
        self.buffers.remove(&id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/buffers.rs"]
mod tests;
