use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let min_width = 10.min(area.width);
    let width = width.max(min_width).min(area.width);

    let min_height = 3.min(area.height);
    let height = height.max(min_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

pub(super) fn bottom_panel_height(body_height: u16) -> u16 {
    let max_height = body_height.saturating_sub(3);
    if max_height == 0 {
        return 0;
    }

    let desired = body_height.saturating_div(3);
    desired.max(6).min(max_height)
}

/// Byte range of `text` to show in `width` columns so that `cursor` stays visible.
pub(super) fn visible_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let cursor = cursor.min(text.len());
    if width == 0 {
        return (cursor, cursor);
    }

    let mut start = 0;
    while text[start..cursor].width() >= width {
        match text[start..].chars().next() {
            Some(ch) => start += ch.len_utf8(),
            None => break,
        }
    }

    let mut end = start;
    let mut used = 0;
    for ch in text[start..].chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end += ch.len_utf8();
    }

    (start, end.max(cursor))
}

/// Greedy word wrap by display width. Words longer than a line are split.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0;

        for word in paragraph.split_whitespace() {
            let word_w = word.width();
            if line_w > 0 && line_w + 1 + word_w > width {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            if line_w > 0 {
                line.push(' ');
                line_w += 1;
            }

            if word_w <= width {
                line.push_str(word);
                line_w += word_w;
                continue;
            }

            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if line_w + w > width && line_w > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push(ch);
                line_w += w;
            }
        }

        lines.push(line);
    }

    lines
}

/// Truncates to `width` display columns.
pub(super) fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..i];
        }
        used += w;
    }
    text
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/util.rs"]
mod tests;
