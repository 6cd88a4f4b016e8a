use super::super::Workbench;
use crate::kernel::FocusTarget;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const MENU_ITEMS: [&str; 8] = [
    "File",
    "Edit",
    "Selection",
    "View",
    "Go",
    "Run",
    "Terminal",
    "Help",
];

impl Workbench {
    fn focus_label(&self) -> &'static str {
        match self.store.state().ui.focus {
            FocusTarget::Explorer => "Explorer",
            FocusTarget::Editor => "Editor",
            FocusTarget::Chat => "Chat",
        }
    }

    pub(super) fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let base = Style::default().bg(self.theme.menu_bg).fg(self.theme.menu_fg);
        frame.render_widget(Block::default().style(base), area);

        let mut spans = vec![Span::styled(" ", base)];
        for item in MENU_ITEMS {
            spans.push(Span::styled(item, base));
            spans.push(Span::styled("  ", base));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        frame.render_widget(Block::default().style(base), area);

        let state = self.store.state();
        let left = format!(" 🔗 main   ↑ 0 ↓ 0   Solana Devnet   {}", self.focus_label());

        let cursor = state
            .tabs
            .active_file()
            .and_then(|id| state.buffers.get(id))
            .map(|buffer| {
                let (line, col) = buffer.cursor_line_col();
                format!("Ln {}, Col {}   ", line + 1, col + 1)
            })
            .unwrap_or_default();
        let ai = if state.chat.pending().is_some() {
            "Código AI: Thinking…"
        } else {
            "Código AI: Ready"
        };
        let right = format!("{cursor}Rust 1.70.0   Anchor 0.28.0   {ai} ");

        let right_w = (right.width() as u16).min(area.width);
        let left_area = Rect::new(area.x, area.y, area.width - right_w, 1);
        let right_area = Rect::new(area.x + area.width - right_w, area.y, right_w, 1);

        frame.render_widget(Paragraph::new(Span::styled(left, base)), left_area);
        frame.render_widget(Paragraph::new(Span::styled(right, base)), right_area);
    }
}
