use super::util::rect_contains;
use super::{WelcomeAction, Workbench};
use crate::core::Command;
use crate::kernel::Action as KernelAction;
use crate::tui::view::EventResult;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

fn hit(area: Option<ratatui::layout::Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| rect_contains(a, x, y))
}

impl Workbench {
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let (x, y) = (event.column, event.row);

        if self.store.state().ui.explorer_context_menu.visible {
            return self.handle_context_menu_mouse(event);
        }
        if self.store.state().ui.has_modal() {
            return EventResult::Ignored;
        }

        let changed = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(x, y),
            MouseEventKind::Down(MouseButton::Right) => self.handle_right_click(x, y),
            MouseEventKind::ScrollUp => self.handle_scroll(x, y, -1),
            MouseEventKind::ScrollDown => self.handle_scroll(x, y, 1),
            _ => return EventResult::Ignored,
        };
        EventResult::from_changed(changed)
    }

    fn handle_context_menu_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let Some(area) = self.hits.context_menu else {
            let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
            return EventResult::Consumed;
        };

        let inside = rect_contains(area, event.column, event.row);
        let item_row = event.row.saturating_sub(area.y.saturating_add(1)) as usize;
        let on_item = inside && event.row > area.y && event.row + 1 < area.y + area.height;

        match event.kind {
            MouseEventKind::Moved if on_item => {
                let changed = self.dispatch_kernel(KernelAction::ExplorerContextMenuSetSelected {
                    index: item_row,
                });
                EventResult::from_changed(changed)
            }
            MouseEventKind::Down(MouseButton::Left) if on_item => {
                let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuSetSelected {
                    index: item_row,
                });
                let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuConfirm);
                EventResult::Consumed
            }
            MouseEventKind::Down(_) if !inside => {
                let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) -> bool {
        if hit(self.hits.explorer_new_file, x, y) {
            return self.run_command(Command::NewFile);
        }
        if hit(self.hits.explorer_new_folder, x, y) {
            return self.run_command(Command::NewFolder);
        }
        if let Some(tree) = self.hits.explorer_tree.filter(|a| rect_contains(*a, x, y)) {
            let row = self.store.state().explorer.scroll_offset + usize::from(y - tree.y);
            if row < self.store.state().explorer.rows.len() {
                return self.dispatch_kernel(KernelAction::ExplorerClickRow { row });
            }
            return self.run_command(Command::FocusExplorer);
        }
        if hit(self.hits.sidebar, x, y) {
            return self.run_command(Command::FocusExplorer);
        }

        if let Some(tab_hit) = self
            .hits
            .tabs
            .iter()
            .find(|t| rect_contains(t.area, x, y))
            .copied()
        {
            if rect_contains(tab_hit.close, x, y) {
                return self.dispatch_kernel(KernelAction::CloseTab { tab: tab_hit.tab });
            }
            let activated = self.dispatch_kernel(KernelAction::ActivateTab { tab: tab_hit.tab });
            return self.run_command(Command::FocusEditor) || activated;
        }

        if let Some(action) = self
            .hits
            .welcome_actions
            .iter()
            .find(|(_, area)| rect_contains(*area, x, y))
            .map(|(action, _)| *action)
        {
            return match action {
                WelcomeAction::OpenEscrow => self.run_command(Command::OpenEscrowContract),
                WelcomeAction::OpenChat => self.run_command(Command::FocusChat),
                WelcomeAction::OpenTerminal => {
                    !self.terminal_visible() && self.run_command(Command::ToggleTerminal)
                }
            };
        }
        if hit(self.hits.show_welcome, x, y) {
            return self.run_command(Command::ShowWelcome);
        }
        if hit(self.hits.editor, x, y) {
            return self.run_command(Command::FocusEditor);
        }

        if hit(self.hits.chat_close, x, y) {
            return self.run_command(Command::ToggleChat);
        }
        if hit(self.hits.chat_send, x, y) {
            return self.run_command(Command::ChatSend);
        }
        if hit(self.hits.chat, x, y) {
            return self.run_command(Command::FocusChat);
        }

        if hit(self.hits.terminal_close, x, y) {
            return self.run_command(Command::ToggleTerminal);
        }

        false
    }

    fn handle_right_click(&mut self, x: u16, y: u16) -> bool {
        let Some(tree) = self.hits.explorer_tree.filter(|a| rect_contains(*a, x, y)) else {
            return false;
        };

        let row = self.store.state().explorer.scroll_offset + usize::from(y - tree.y);
        let tree_row = (row < self.store.state().explorer.rows.len()).then_some(row);
        self.dispatch_kernel(KernelAction::ExplorerContextMenuOpen { tree_row, x, y })
    }

    fn handle_scroll(&mut self, x: u16, y: u16, direction: isize) -> bool {
        let step = self.store.state().config.scroll_step().max(1) as isize;

        if hit(self.hits.explorer_tree, x, y) {
            return self.dispatch_kernel(KernelAction::ExplorerScroll {
                delta: direction * step,
            });
        }

        if hit(self.hits.editor_text, x, y) {
            let prev = self.editor_viewport.scroll;
            let next = if direction < 0 {
                prev.saturating_sub(step as usize)
            } else {
                prev.saturating_add(step as usize)
            };
            // Clamped against the buffer length on the next render.
            self.editor_viewport.scroll = next;
            self.editor_viewport.detached = true;
            return next != prev;
        }

        if hit(self.hits.chat, x, y) {
            let viewport = &mut self.chat_viewport;
            let prev = viewport.scroll;
            viewport.scroll = if direction < 0 {
                prev.saturating_sub(step as usize)
            } else {
                prev.saturating_add(step as usize).min(viewport.max_scroll)
            };
            viewport.detached = viewport.scroll < viewport.max_scroll;
            return viewport.scroll != prev;
        }

        false
    }
}
