use super::super::util::{visible_window, wrap_text};
use super::super::Workbench;
use crate::kernel::{ChatRole, FocusTarget};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const CHAT_TITLE: &str = " 💬 Código AI ";
const INPUT_PLACEHOLDER: &str = "Ask about your code...";
const SEND_LABEL: &str = " Send ";
const INPUT_PREFIX: &str = "> ";

impl Workbench {
    pub(super) fn render_chat(&mut self, frame: &mut Frame, area: Rect) {
        if area.width < 8 || area.height < 5 {
            return;
        }
        self.hits.chat = Some(area);

        let focused = self.store.state().ui.focus == FocusTarget::Chat;
        let border = Style::default().fg(if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        });
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(
                    CHAT_TITLE,
                    Style::default()
                        .fg(self.theme.accent_fg)
                        .add_modifier(Modifier::BOLD),
                )),
            area,
        );

        let close_area = Rect::new(area.x + area.width - 3, area.y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("×", Style::default().fg(self.theme.muted_fg))),
            close_area,
        );
        self.hits.chat_close = Some(close_area);

        let inner = Rect::new(
            area.x + 1,
            area.y + 1,
            area.width - 2,
            area.height - 2,
        );
        let input_row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let messages_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 2);

        self.render_chat_messages(frame, messages_area);
        self.render_chat_input(frame, input_row);
    }

    fn render_chat_messages(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let chat = &self.store.state().chat;
        let width = area.width as usize;
        let bubble_width = (width * 4 / 5).max(8).min(width);

        let user = Style::default()
            .bg(self.theme.chat_user_bg)
            .fg(self.theme.chat_user_fg);
        let assistant = Style::default()
            .bg(self.theme.chat_assistant_bg)
            .fg(self.theme.chat_assistant_fg);

        let mut lines: Vec<Line> = Vec::new();
        for message in chat.messages() {
            let style = match message.role {
                ChatRole::User => user,
                ChatRole::Assistant => assistant,
            };
            let wrapped = wrap_text(&message.content, bubble_width.saturating_sub(2));
            let inner_w = wrapped.iter().map(|l| l.width()).max().unwrap_or(0);
            for text in wrapped {
                let fill = inner_w.saturating_sub(text.width());
                let padded = format!(" {text}{} ", " ".repeat(fill));
                let indent = match message.role {
                    ChatRole::User => width.saturating_sub(padded.width()),
                    ChatRole::Assistant => 0,
                };
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    Span::styled(padded, style),
                ]));
            }
            lines.push(Line::raw(""));
        }

        if chat.pending().is_some() {
            lines.push(Line::from(Span::styled(
                "Código AI is typing…",
                Style::default()
                    .fg(self.theme.muted_fg)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let message_count = chat.messages().len();
        let max_scroll = lines.len().saturating_sub(area.height as usize);
        let viewport = &mut self.chat_viewport;
        if viewport.seen_messages != message_count {
            viewport.seen_messages = message_count;
            viewport.detached = false;
        }
        viewport.max_scroll = max_scroll;
        viewport.scroll = if viewport.detached {
            viewport.scroll.min(max_scroll)
        } else {
            max_scroll
        };

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(viewport.scroll)
            .take(area.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible), area);
    }

    fn render_chat_input(&mut self, frame: &mut Frame, area: Rect) {
        let send_w = SEND_LABEL.width() as u16;
        if area.width <= send_w + 4 {
            return;
        }

        let field = Rect::new(area.x, area.y, area.width - send_w - 1, 1);
        let send = Rect::new(area.x + area.width - send_w, area.y, send_w, 1);
        self.hits.chat_input = Some(field);
        self.hits.chat_send = Some(send);

        let input = self.store.state().chat.input();
        let field_style = Style::default()
            .bg(self.theme.chat_assistant_bg)
            .fg(self.theme.text_fg);

        let line = if input.is_empty() {
            Line::from(vec![
                Span::styled(INPUT_PREFIX, field_style),
                Span::styled(INPUT_PLACEHOLDER, field_style.fg(self.theme.muted_fg)),
            ])
        } else {
            let avail = (field.width as usize).saturating_sub(INPUT_PREFIX.width());
            let (start, end) = visible_window(input, input.len(), avail);
            Line::from(vec![
                Span::styled(INPUT_PREFIX, field_style),
                Span::styled(&input[start..end], field_style),
            ])
        };
        frame.render_widget(Paragraph::new(line).style(field_style), field);
        frame.render_widget(
            Paragraph::new(Span::styled(
                SEND_LABEL,
                Style::default()
                    .bg(self.theme.chat_user_bg)
                    .fg(self.theme.chat_user_fg),
            )),
            send,
        );
    }

    pub(super) fn chat_input_cursor(&self) -> Option<(u16, u16)> {
        let field = self.hits.chat_input?;
        let input = self.store.state().chat.input();
        let avail = (field.width as usize).saturating_sub(INPUT_PREFIX.width());
        let (start, _) = visible_window(input, input.len(), avail);
        let x_off = (INPUT_PREFIX.width() + input[start..].width()) as u16;
        Some((field.x + x_off.min(field.width.saturating_sub(1)), field.y))
    }
}
