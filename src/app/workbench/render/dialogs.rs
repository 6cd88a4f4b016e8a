use super::super::util::{centered_rect, visible_window};
use super::super::Workbench;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const INPUT_PREFIX: &str = "> ";

fn inner_of(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn input_dialog_area(area: Rect) -> Rect {
    centered_rect(50, 7, area)
}

impl Workbench {
    pub(super) fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.confirm_dialog;
        if !dialog.visible {
            return;
        }

        let width = 50.min(area.width.saturating_sub(4));
        let height = 6.min(area.height.saturating_sub(2));
        if width < 20 || height < 4 {
            return;
        }

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, dialog_area);

        let base_style = Style::default()
            .bg(self.theme.palette_bg)
            .fg(self.theme.palette_fg);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.error_fg))
                .style(base_style),
            dialog_area,
        );

        let inner = inner_of(dialog_area);
        if inner.height < 2 || inner.width < 10 {
            return;
        }

        let title_line = Line::from(Span::styled(
            "Confirm",
            Style::default()
                .fg(self.theme.accent_fg)
                .add_modifier(Modifier::BOLD),
        ));
        let msg_line = Line::from(dialog.message.as_str());
        let hint_line = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(self.theme.error_fg)),
            Span::raw(" Delete  "),
            Span::styled("[Esc]", Style::default().fg(self.theme.muted_fg)),
            Span::raw(" Cancel"),
        ]);

        let content = Paragraph::new(vec![title_line, msg_line, Line::raw(""), hint_line])
            .style(base_style)
            .wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }

    pub(super) fn render_explorer_context_menu(&mut self, frame: &mut Frame, area: Rect) {
        let menu = &self.store.state().ui.explorer_context_menu;
        if !menu.visible || menu.items.is_empty() || area.width < 3 || area.height < 3 {
            self.hits.context_menu = None;
            return;
        }

        let items = &menu.items;
        let max_label_w = items
            .iter()
            .map(|item| item.label().width())
            .max()
            .unwrap_or(0);

        let desired_inner_width = (max_label_w.saturating_add(4)).min(u16::MAX as usize) as u16;
        let desired_inner_height = (items.len().min(u16::MAX as usize)) as u16;
        let width = desired_inner_width.saturating_add(2).min(area.width).max(3);
        let height = desired_inner_height
            .saturating_add(2)
            .min(area.height)
            .max(3);

        let right = area.x.saturating_add(area.width);
        let bottom = area.y.saturating_add(area.height);

        let mut x = menu.anchor.0.max(area.x);
        let mut y = menu.anchor.1.max(area.y);
        if x.saturating_add(width) > right {
            x = right.saturating_sub(width);
        }
        if y.saturating_add(height) > bottom {
            y = bottom.saturating_sub(height);
        }

        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let base_style = Style::default()
            .bg(self.theme.palette_bg)
            .fg(self.theme.palette_fg);
        let border_style = Style::default()
            .fg(self.theme.focus_border)
            .bg(self.theme.palette_bg);
        let selected_style = Style::default()
            .bg(self.theme.selection_bg)
            .fg(self.theme.selection_fg);

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(base_style),
            popup_area,
        );

        let inner = inner_of(popup_area);
        let selected = menu.selected.min(items.len().saturating_sub(1));
        let mut lines = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate().take(inner.height as usize) {
            let is_selected = idx == selected;
            let style = if is_selected {
                selected_style
            } else {
                base_style
            };
            let prefix = if is_selected { "▸ " } else { "  " };
            let mut text = format!("{prefix}{}", item.label());
            let pad_to = inner.width as usize;
            let current_w = text.width();
            if current_w < pad_to {
                text.push_str(&" ".repeat(pad_to - current_w));
            }
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines).style(base_style), inner);
        self.hits.context_menu = Some(popup_area);
    }

    pub(super) fn render_input_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.input_dialog;
        if !dialog.visible {
            return;
        }

        let popup_area = input_dialog_area(area);
        if popup_area.width < 20 || popup_area.height < 6 {
            return;
        }

        frame.render_widget(Clear, popup_area);

        let base_style = Style::default()
            .bg(self.theme.palette_bg)
            .fg(self.theme.palette_fg);
        let muted_style = Style::default().fg(self.theme.muted_fg);

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.focus_border))
                .style(base_style),
            popup_area,
        );

        let inner = inner_of(popup_area);
        let title = if dialog.title.is_empty() {
            "Input"
        } else {
            dialog.title.as_str()
        };
        let title_style = Style::default()
            .fg(self.theme.accent_fg)
            .add_modifier(Modifier::BOLD);

        let prefix_w = INPUT_PREFIX.width();
        let cursor = dialog.cursor.min(dialog.value.len());
        let (v_start, v_end) = visible_window(
            dialog.value.as_str(),
            cursor,
            (inner.width as usize).saturating_sub(prefix_w),
        );

        let value_line = if dialog.value.is_empty() {
            let placeholder = dialog.kind.map(|k| k.placeholder()).unwrap_or_default();
            Line::from(vec![
                Span::styled(INPUT_PREFIX, base_style),
                Span::styled(placeholder, muted_style),
            ])
        } else {
            Line::from(vec![
                Span::styled(INPUT_PREFIX, base_style),
                Span::styled(
                    dialog.value.get(v_start..v_end).unwrap_or_default(),
                    base_style,
                ),
            ])
        };

        let error_line = match dialog.error.as_deref() {
            Some(err) => Line::from(Span::styled(err, Style::default().fg(self.theme.error_fg))),
            None => Line::raw(""),
        };

        let action = match dialog.kind {
            Some(crate::kernel::InputDialogKind::Rename { .. }) => " Rename  ",
            _ => " Create  ",
        };
        let hint_line = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(self.theme.accent_fg)),
            Span::raw(action),
            Span::styled("[Esc]", muted_style),
            Span::raw(" Cancel"),
        ]);

        let lines = vec![
            Line::from(Span::styled(title, title_style)),
            value_line,
            error_line,
            hint_line,
        ];
        frame.render_widget(Paragraph::new(lines).style(base_style), inner);
    }

    pub(super) fn input_dialog_cursor(&self) -> Option<(u16, u16)> {
        let area = self.hits.render_area?;
        let dialog = &self.store.state().ui.input_dialog;
        if !dialog.visible {
            return None;
        }

        let popup_area = input_dialog_area(area);
        let inner = inner_of(popup_area);
        if inner.width == 0 || inner.height < 2 {
            return None;
        }

        let cursor = dialog.cursor.min(dialog.value.len());
        let prefix_w = INPUT_PREFIX.width();
        let (start, _end) = visible_window(
            dialog.value.as_str(),
            cursor,
            (inner.width as usize).saturating_sub(prefix_w),
        );
        let before_w = dialog.value.get(start..cursor).unwrap_or_default().width();

        let x = inner
            .x
            .saturating_add((prefix_w + before_w) as u16)
            .min(inner.x + inner.width.saturating_sub(1));
        // Title at inner.y, value line right below.
        let y = inner.y.saturating_add(1);

        Some((x, y))
    }
}
