use super::*;

#[test]
fn centered_rect_stays_inside_area() {
    let area = Rect::new(10, 5, 80, 20);
    let rect = centered_rect(50, 7, area);
    assert_eq!(rect, Rect::new(30, 11, 40, 7));

    let tiny = centered_rect(50, 7, Rect::new(0, 0, 8, 2));
    assert_eq!(tiny, Rect::new(0, 0, 8, 2));
}

#[test]
fn rect_contains_is_half_open() {
    let area = Rect::new(2, 2, 3, 3);
    assert!(rect_contains(area, 2, 2));
    assert!(rect_contains(area, 4, 4));
    assert!(!rect_contains(area, 5, 4));
    assert!(!rect_contains(area, 1, 2));
}

#[test]
fn visible_window_follows_cursor() {
    assert_eq!(visible_window("hello", 5, 10), (0, 5));
    let (start, end) = visible_window("abcdefghij", 10, 4);
    assert_eq!(&"abcdefghij"[start..end], "hij");
    assert_eq!(visible_window("abc", 1, 0), (1, 1));
}

#[test]
fn wrap_text_breaks_on_words() {
    assert_eq!(
        wrap_text("the quick brown fox", 10),
        vec!["the quick", "brown fox"]
    );
    assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    assert_eq!(wrap_text("a\n\nb", 5), vec!["a", "", "b"]);
}

#[test]
fn truncate_respects_wide_chars() {
    assert_eq!(truncate_to_width("código", 3), "cód");
    assert_eq!(truncate_to_width("🦀🦀", 3), "🦀");
    assert_eq!(truncate_to_width("ab", 10), "ab");
}
