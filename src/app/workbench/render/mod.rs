use super::{HitMap, Workbench};
use crate::kernel::{Action as KernelAction, FocusTarget, TabKey};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod chat;
mod dialogs;
mod editor;
mod sidebar;
mod status;
mod terminal;

const MENU_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH_PERCENT: u16 = 22;
const SIDEBAR_MIN_WIDTH: u16 = 24;
const CHAT_WIDTH: u16 = 40;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.hits = HitMap {
        render_area: Some(area),
        ..HitMap::default()
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MENU_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    workbench.render_menu_bar(frame, rows[0]);
    render_body(workbench, frame, rows[1]);
    workbench.render_status(frame, rows[2]);

    workbench.render_explorer_context_menu(frame, rows[1]);
    workbench.render_input_dialog(frame, area);
    workbench.render_confirm_dialog(frame, area);
}

fn render_body(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let ui = &workbench.store.state().ui;
    let (sidebar_visible, chat_visible, terminal_visible) =
        (ui.sidebar_visible, ui.chat_visible, ui.terminal_visible);

    let sidebar_width = if sidebar_visible {
        (area.width.saturating_mul(SIDEBAR_WIDTH_PERCENT) / 100)
            .max(SIDEBAR_MIN_WIDTH)
            .min(area.width / 2)
    } else {
        0
    };
    let rest = area.width.saturating_sub(sidebar_width);
    let chat_width = if chat_visible {
        CHAT_WIDTH.min(rest / 2)
    } else {
        0
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width),
            Constraint::Min(0),
            Constraint::Length(chat_width),
        ])
        .split(area);

    if sidebar_width > 0 {
        workbench.render_sidebar(frame, columns[0]);
    }

    let center = columns[1];
    let show_welcome_height = u16::from(
        !workbench
            .store
            .state()
            .tabs
            .contains(TabKey::Welcome),
    );
    let terminal_height = if terminal_visible {
        super::util::bottom_panel_height(center.height)
    } else {
        0
    };
    let center_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(show_welcome_height),
            Constraint::Length(terminal_height),
        ])
        .split(center);

    workbench.render_editor_area(frame, center_rows[0]);
    if show_welcome_height > 0 {
        workbench.render_show_welcome_button(frame, center_rows[1]);
    }
    if terminal_height > 0 {
        workbench.render_terminal(frame, center_rows[2]);
    }

    if chat_width > 0 {
        workbench.render_chat(frame, columns[2]);
    }
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    let ui = &workbench.store.state().ui;
    if ui.input_dialog.visible {
        return workbench.input_dialog_cursor();
    }
    if ui.has_modal() {
        return None;
    }

    match ui.focus {
        FocusTarget::Editor => workbench.editor_cursor(),
        FocusTarget::Chat => workbench.chat_input_cursor(),
        FocusTarget::Explorer => None,
    }
}

impl Workbench {
    fn sync_explorer_view_height(&mut self, height: u16) {
        if height == 0 {
            return;
        }
        self.viewport_cache.explorer_view_height = Some(height);
    }

    /// Pushes sizes measured during render into the kernel. Returns true when
    /// the frame should be drawn again.
    pub fn flush_post_render_sync(&mut self) -> bool {
        let mut changed = false;

        if let Some(height) = self.viewport_cache.explorer_view_height {
            if self.viewport_cache.applied_explorer_view_height != Some(height) {
                self.viewport_cache.applied_explorer_view_height = Some(height);
                changed |= self.dispatch_kernel(KernelAction::ExplorerSetViewHeight {
                    height: height as usize,
                });
            }
        }

        changed
    }
}
