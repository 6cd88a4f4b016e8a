use super::super::Workbench;
use crate::kernel::terminal::{TranscriptStyle, PROMPT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl Workbench {
    pub(super) fn render_terminal(&mut self, frame: &mut Frame, area: Rect) {
        if area.width < 8 || area.height < 3 {
            return;
        }
        self.hits.terminal = Some(area);

        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(self.theme.separator))
                .title(Span::styled(
                    " ▣ Terminal ",
                    Style::default().fg(self.theme.success_fg),
                )),
            area,
        );

        let close_area = Rect::new(area.x + area.width - 2, area.y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("×", Style::default().fg(self.theme.muted_fg))),
            close_area,
        );
        self.hits.terminal_close = Some(close_area);

        let body = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 1);
        let terminal = &self.store.state().terminal;

        let prompt = Style::default().fg(self.theme.terminal_fg);
        let output = Style::default().fg(self.theme.muted_fg);
        let success = Style::default().fg(self.theme.success_fg);

        let mut lines: Vec<Line> = terminal
            .transcript()
            .iter()
            .map(|line| match line.style {
                TranscriptStyle::Command => Line::from(Span::styled(
                    format!("{PROMPT}{}", line.text),
                    prompt,
                )),
                TranscriptStyle::Output => Line::from(Span::styled(line.text, output)),
                TranscriptStyle::Success => Line::from(Span::styled(line.text, success)),
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(PROMPT, prompt),
            Span::styled("█", prompt.add_modifier(Modifier::SLOW_BLINK)),
        ]));

        if !terminal.logs().is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "── Output ──",
                Style::default()
                    .fg(self.theme.menu_fg)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                terminal
                    .logs()
                    .iter()
                    .map(|l| Line::from(Span::styled(l.as_str(), output))),
            );
        }

        let skip = lines.len().saturating_sub(body.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        frame.render_widget(Paragraph::new(visible), body);
    }
}
