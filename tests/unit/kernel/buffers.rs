use super::*;

#[test]
fn template_mentions_extension() {
    assert_eq!(
        new_file_template("rs"),
        "// New rs file\n// Start coding here..."
    );
}

#[test]
fn set_content_overwrites_and_creates() {
    let mut store = BufferStore::new();
    let id = NodeId::new(3);

    store.set_content(id, "fn main() {}");
    assert_eq!(store.text(id).as_deref(), Some("fn main() {}"));

    store.set_content(id, "");
    assert_eq!(store.text(id).as_deref(), Some(""));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_content_clamps_cursor() {
    let mut buffer = Buffer::new("hello");
    buffer.move_cursor(CursorMotion::FileEnd);
    assert_eq!(buffer.cursor(), 5);

    buffer.set_text("hi");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn ensure_creates_empty_buffer_once() {
    let mut store = BufferStore::new();
    let id = NodeId::new(4);

    store.ensure(id).insert_str("abc");
    store.ensure(id);

    assert_eq!(store.text(id).as_deref(), Some("abc"));
}

#[test]
fn editing_moves_cursor_and_bumps_version() {
    let mut buffer = Buffer::new("");
    buffer.insert_char('a');
    buffer.insert_char('\n');
    buffer.insert_str("bc");

    assert_eq!(buffer.text(), "a\nbc");
    assert_eq!(buffer.cursor_line_col(), (1, 2));
    assert_eq!(buffer.version(), 3);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "a\nb");
    assert!(!buffer.delete_forward());
}

#[test]
fn vertical_motion_clamps_to_line_length() {
    let mut buffer = Buffer::new("long line\nab\nxyz");
    buffer.move_cursor(CursorMotion::LineEnd);
    assert_eq!(buffer.cursor_line_col(), (0, 9));

    buffer.move_cursor(CursorMotion::Down);
    assert_eq!(buffer.cursor_line_col(), (1, 2));

    buffer.move_cursor(CursorMotion::Down);
    assert_eq!(buffer.cursor_line_col(), (2, 2));

    assert!(buffer.move_cursor(CursorMotion::Down));
    assert_eq!(buffer.cursor_line_col(), (2, 3));

    buffer.move_cursor(CursorMotion::LineStart);
    buffer.move_cursor(CursorMotion::Up);
    assert_eq!(buffer.cursor_line_col(), (1, 0));
}

#[test]
fn line_len_ignores_crlf() {
    let buffer = Buffer::new("ab\r\ncd");
    assert_eq!(buffer.line_len(0), 2);
    assert_eq!(buffer.line_len(1), 2);
}

#[test]
fn cursor_stays_put_at_edges() {
    let mut buffer = Buffer::new("x");
    assert!(!buffer.move_cursor(CursorMotion::Left));
    assert!(!buffer.delete_backward());
    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "");
}
