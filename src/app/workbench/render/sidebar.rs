use super::super::Workbench;
use crate::kernel::language::file_icon;
use crate::kernel::FocusTarget;
use crate::models::NodeKind;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const NEW_FILE_LABEL: &str = "+file";
const NEW_FOLDER_LABEL: &str = "+dir";

impl Workbench {
    pub(super) fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        self.hits.sidebar = Some(area);

        let focused = self.store.state().ui.focus == FocusTarget::Explorer;
        let border_style = Style::default().fg(if focused {
            self.theme.focus_border
        } else {
            self.theme.separator
        });
        frame.render_widget(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(border_style),
            area,
        );

        let inner = Rect::new(area.x, area.y, area.width.saturating_sub(1), area.height);
        if inner.width < 4 || inner.height < 4 {
            return;
        }

        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        let project = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        let footer = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let tree = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 3);

        self.render_explorer_header(frame, header);
        frame.render_widget(
            Paragraph::new(Span::styled(
                " CÓDIGO PROJECT",
                Style::default()
                    .fg(self.theme.muted_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            project,
        );
        self.render_explorer_tree(frame, tree);
        frame.render_widget(
            Paragraph::new(Span::styled(
                " ⚠ Remember to save your changes",
                Style::default().fg(self.theme.warning_fg),
            )),
            footer,
        );
    }

    fn render_explorer_header(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(self.theme.menu_fg)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(Span::styled(" EXPLORER", title_style)), area);

        let file_w = NEW_FILE_LABEL.width() as u16;
        let folder_w = NEW_FOLDER_LABEL.width() as u16;
        let needed = file_w + folder_w + 2;
        if area.width < needed + " EXPLORER".width() as u16 {
            return;
        }

        let folder_x = area.x + area.width - folder_w - 1;
        let file_x = folder_x - file_w - 1;
        let file_area = Rect::new(file_x, area.y, file_w, 1);
        let folder_area = Rect::new(folder_x, area.y, folder_w, 1);

        let action_style = Style::default().fg(self.theme.muted_fg);
        frame.render_widget(
            Paragraph::new(Span::styled(
                NEW_FILE_LABEL,
                action_style.fg(self.theme.success_fg),
            )),
            file_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                NEW_FOLDER_LABEL,
                action_style.fg(self.theme.folder_fg),
            )),
            folder_area,
        );

        self.hits.explorer_new_file = Some(file_area);
        self.hits.explorer_new_folder = Some(folder_area);
    }

    fn render_explorer_tree(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        self.hits.explorer_tree = Some(area);
        self.sync_explorer_view_height(area.height);

        let state = self.store.state();
        let explorer = &state.explorer;
        let indent = usize::from(state.config.explorer_indent);
        let selected = explorer.selected();
        let focused = state.ui.focus == FocusTarget::Explorer;

        let base = Style::default().fg(self.theme.menu_fg);
        let selected_style = Style::default()
            .bg(self.theme.selection_bg)
            .fg(self.theme.selection_fg);

        let start = explorer.scroll_offset.min(explorer.rows.len());
        let end = (start + area.height as usize).min(explorer.rows.len());

        let mut lines = Vec::with_capacity(end - start);
        for row in &explorer.rows[start..end] {
            let (chevron, icon, name_style) = match row.kind {
                NodeKind::Folder => (
                    if row.is_expanded { "▾ " } else { "▸ " },
                    if row.is_expanded { "📂" } else { "📁" },
                    base.fg(self.theme.folder_fg),
                ),
                NodeKind::File => ("  ", file_icon(row.extension.as_str()), base),
            };

            let is_selected = selected == Some(row.id);
            let style = if is_selected { selected_style } else { name_style };
            let pad = " ".repeat(1 + usize::from(row.depth) * indent);

            let mut text = format!("{pad}{chevron}{icon} {}", row.name);
            let width = area.width as usize;
            let current = text.width();
            if is_selected && current < width {
                text.push_str(&" ".repeat(width - current));
            }
            let style = if is_selected && focused {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
