use super::super::util::{truncate_to_width, wrap_text};
use super::super::{TabHit, WelcomeAction, Workbench};
use crate::kernel::language::file_icon;
use crate::kernel::{LanguageId, TabKey};
use crate::models::NodeId;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const NO_FILE_TEXT: &str = "No file is open. Use the sidebar or buttons to open a file.";
const WELCOME_TITLE: &str = "👋 Welcome to Código";
const WELCOME_SUBTITLE: &str = "Your AI powered development environment for building on Solana.";
const WELCOME_BODY: &str = "Here, you can create, explore, and deploy smart contracts with the \
help of an integrated AI developer platform. You can get started by exploring the file tree, \
opening files, or chatting with Código AI.";
const WELCOME_CARDS: [(&str, &str); 2] = [
    (
        "🗂️ File Explorer",
        "Navigate through your project files. Click on folders to expand them and files to open \
         them in the editor.",
    ),
    (
        "💬 AI Assistant",
        "Chat with Código AI for help with Solana development, code reviews, and smart contract \
         guidance.",
    ),
];
const WELCOME_ACTIONS: [(WelcomeAction, &str); 3] = [
    (WelcomeAction::OpenEscrow, " Open Escrow Contract "),
    (WelcomeAction::OpenChat, " Chat with AI "),
    (WelcomeAction::OpenTerminal, " Open Terminal "),
];
const SHOW_WELCOME_LABEL: &str = " ✨ Show Welcome Screen ";
const CLOSE_GLYPH: &str = "×";

impl Workbench {
    pub(super) fn render_editor_area(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.hits.editor = Some(area);

        let tab_bar = Rect::new(area.x, area.y, area.width, 1);
        let content = Rect::new(
            area.x,
            area.y.saturating_add(1),
            area.width,
            area.height.saturating_sub(1),
        );

        self.render_tab_bar(frame, tab_bar);
        if content.height == 0 {
            return;
        }

        match self.store.state().tabs.active() {
            None => self.render_no_file(frame, content),
            Some(TabKey::Welcome) => self.render_welcome(frame, content),
            Some(TabKey::File(id)) => self.render_file(frame, content, id),
        }
    }

    fn render_tab_bar(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.menu_bg)),
            area,
        );

        let state = self.store.state();
        let active = state.tabs.active();
        let right = area.x.saturating_add(area.width);
        let mut x = area.x;
        let mut hits = Vec::with_capacity(state.tabs.len());

        for &tab in state.tabs.tabs() {
            let title = state.tab_title(tab);
            let icon = match tab.file().and_then(|id| state.tree.find(id)) {
                Some(node) => file_icon(node.extension().unwrap_or_default()),
                None => "👋",
            };
            let label = format!(" {icon} {title} ");
            let label_w = label.width() as u16;
            let close_w = CLOSE_GLYPH.width() as u16 + 1;
            let tab_w = label_w + close_w;
            if x.saturating_add(tab_w) > right {
                break;
            }

            let is_active = active == Some(tab);
            let style = if is_active {
                Style::default()
                    .bg(self.theme.tab_active_bg)
                    .fg(self.theme.tab_active_fg)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
                    .bg(self.theme.menu_bg)
                    .fg(self.theme.tab_inactive_fg)
            };

            let tab_area = Rect::new(x, area.y, tab_w, 1);
            let close_area = Rect::new(x + label_w, area.y, close_w, 1);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled(format!("{CLOSE_GLYPH} "), style.fg(self.theme.muted_fg)),
                ])),
                tab_area,
            );

            hits.push(TabHit {
                tab,
                area: tab_area,
                close: close_area,
            });
            x = x.saturating_add(tab_w).saturating_add(1);
        }

        self.hits.tabs = hits;
    }

    fn render_no_file(&self, frame: &mut Frame, area: Rect) {
        let y = area.y + area.height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(
                NO_FILE_TEXT,
                Style::default().fg(self.theme.muted_fg),
            ))
            .alignment(Alignment::Center),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    fn render_welcome(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            area.width.saturating_sub(4),
            area.height.saturating_sub(1),
        );
        if inner.width < 10 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        let accent = Style::default()
            .fg(self.theme.accent_fg)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(self.theme.text_fg);
        let muted = Style::default().fg(self.theme.muted_fg);
        let heading = Style::default()
            .fg(self.theme.tab_active_fg)
            .add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(WELCOME_TITLE, accent)));
        lines.push(Line::raw(""));
        for l in wrap_text(WELCOME_SUBTITLE, width) {
            lines.push(Line::from(Span::styled(l, text)));
        }
        lines.push(Line::raw(""));
        for l in wrap_text(WELCOME_BODY, width) {
            lines.push(Line::from(Span::styled(l, muted)));
        }
        lines.push(Line::raw(""));
        for (title, body) in WELCOME_CARDS {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().fg(self.theme.accent_fg),
            )));
            for l in wrap_text(body, width) {
                lines.push(Line::from(Span::styled(l, muted)));
            }
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled("🚀 Quick Actions", heading)));
        lines.push(Line::raw(""));

        let actions_y = inner.y.saturating_add(lines.len() as u16);
        frame.render_widget(Paragraph::new(lines), inner);

        let bottom = inner.y.saturating_add(inner.height);
        if actions_y >= bottom {
            return;
        }

        let button = Style::default()
            .bg(self.theme.chat_user_bg)
            .fg(self.theme.chat_user_fg)
            .add_modifier(Modifier::BOLD);
        let mut x = inner.x;
        let mut y = actions_y;
        let right = inner.x.saturating_add(inner.width);
        for (action, label) in WELCOME_ACTIONS {
            let w = label.width() as u16;
            if x > inner.x && x.saturating_add(w) > right {
                x = inner.x;
                y = y.saturating_add(2);
            }
            if y >= bottom || w > inner.width {
                break;
            }
            let button_area = Rect::new(x, y, w, 1);
            frame.render_widget(Paragraph::new(Span::styled(label, button)), button_area);
            self.hits.welcome_actions.push((action, button_area));
            x = x.saturating_add(w).saturating_add(2);
        }

        let hint_y = y.saturating_add(2);
        if hint_y < bottom {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Ctrl+O escrow  ·  Ctrl+L chat  ·  Ctrl+J terminal  ·  Ctrl+B explorer",
                    muted,
                )),
                Rect::new(inner.x, hint_y, inner.width, 1),
            );
        }
    }

    fn render_file(&mut self, frame: &mut Frame, area: Rect, id: NodeId) {
        let state = self.store.state();
        let name = state.tree.name(id).unwrap_or_default();
        let language = LanguageId::from_name(name);

        let label = format!("{} • {} ", language.display_name(), language.language_id());
        let label_w = (label.width() as u16).min(area.width);
        let name_area = Rect::new(area.x, area.y, area.width - label_w, 1);
        let label_area = Rect::new(area.x + area.width - label_w, area.y, label_w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {name}"),
                Style::default()
                    .fg(self.theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            name_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(self.theme.muted_fg))),
            label_area,
        );

        let body = Rect::new(
            area.x,
            area.y.saturating_add(1),
            area.width,
            area.height.saturating_sub(1),
        );
        if body.height == 0 || body.width < 4 {
            return;
        }

        let Some(buffer) = state.buffers.get(id) else {
            return;
        };
        let rope = buffer.rope();
        let total_lines = buffer.len_lines().max(1);
        let (cursor_line, _) = buffer.cursor_line_col();
        let gutter_w = total_lines.to_string().len() as u16 + 2;
        let text_area = Rect::new(
            body.x.saturating_add(gutter_w),
            body.y,
            body.width.saturating_sub(gutter_w),
            body.height,
        );

        let height = body.height as usize;
        let viewport = &mut self.editor_viewport;
        let active = Some(TabKey::File(id));
        if viewport.tab != active {
            viewport.tab = active;
            viewport.scroll = 0;
            viewport.detached = false;
        }
        if !viewport.detached {
            if cursor_line < viewport.scroll {
                viewport.scroll = cursor_line;
            } else if cursor_line >= viewport.scroll + height {
                viewport.scroll = cursor_line + 1 - height;
            }
        }
        viewport.scroll = viewport.scroll.min(total_lines.saturating_sub(1));
        let scroll = viewport.scroll;

        let gutter_style = Style::default().fg(self.theme.gutter_fg);
        let current_gutter = Style::default().fg(self.theme.accent_fg);
        let text_style = Style::default().fg(self.theme.text_fg);
        let text_width = text_area.width as usize;

        let mut lines = Vec::with_capacity(height);
        for line_idx in scroll..(scroll + height).min(total_lines) {
            let raw = rope.line(line_idx).to_string();
            let raw = raw.trim_end_matches(['\n', '\r']);
            let display = raw.replace('\t', "    ");
            let shown = truncate_to_width(&display, text_width);
            let number = format!(
                "{:>width$} ",
                line_idx + 1,
                width = gutter_w as usize - 1
            );
            let number_style = if line_idx == cursor_line {
                current_gutter
            } else {
                gutter_style
            };
            lines.push(Line::from(vec![
                Span::styled(number, number_style),
                Span::styled(shown.to_string(), text_style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), body);
        self.hits.editor_text = Some(text_area);
    }

    pub(super) fn render_show_welcome_button(&mut self, frame: &mut Frame, area: Rect) {
        let w = (SHOW_WELCOME_LABEL.width() as u16).min(area.width);
        let button_area = Rect::new(area.x.saturating_add(1).min(area.x + area.width), area.y, w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                SHOW_WELCOME_LABEL,
                Style::default()
                    .bg(self.theme.chat_user_bg)
                    .fg(self.theme.chat_user_fg),
            )),
            button_area,
        );
        self.hits.show_welcome = Some(button_area);
    }

    /// Screen position of the caret in the active file, if it is on screen.
    pub(super) fn editor_cursor(&self) -> Option<(u16, u16)> {
        let text_area = self.hits.editor_text?;
        let id = self.store.state().tabs.active_file()?;
        let buffer = self.store.state().buffers.get(id)?;

        let (line, col) = buffer.cursor_line_col();
        let scroll = self.editor_viewport.scroll;
        if line < scroll || line - scroll >= text_area.height as usize {
            return None;
        }

        let line_text = buffer.rope().line(line).to_string();
        let prefix: String = line_text.chars().take(col).collect();
        let x_off = prefix.replace('\t', "    ").width() as u16;
        if x_off >= text_area.width {
            return None;
        }

        Some((
            text_area.x + x_off,
            text_area.y + (line - scroll) as u16,
        ))
    }
}
