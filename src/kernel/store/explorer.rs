use crate::kernel::state::{ExplorerContextMenuItem, ExplorerContextMenuState};
use crate::kernel::{Action, FocusTarget};
use crate::models::{NodeId, NodeKind};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.explorer.set_view_height(height))
            }
            Action::ExplorerMoveSelection { delta } => {
                super::DispatchResult::changed(self.state.explorer.move_selection(delta))
            }
            Action::ExplorerScroll { delta } => {
                super::DispatchResult::changed(self.state.explorer.scroll(delta))
            }
            Action::ExplorerActivate => {
                let Some(id) = self.state.explorer.selected() else {
                    return super::DispatchResult::changed(false);
                };
                let mut changed = self.activate_node(id);
                if self.state.tree.is_file(id) {
                    changed |= self.set_focus(FocusTarget::Editor);
                }
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerCollapse => {
                let Some(id) = self.state.explorer.selected() else {
                    return super::DispatchResult::changed(false);
                };
                if self.state.tree.is_expanded(id) {
                    return super::DispatchResult::changed(self.toggle_folder(id));
                }
                let parent = self.state.tree.find(id).and_then(|node| node.parent());
                let changed = parent.is_some_and(|p| self.state.explorer.set_selected(Some(p)));
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerClickRow { row } => {
                let prev_focus = self.state.ui.focus;
                self.state.ui.focus = FocusTarget::Explorer;
                let Some(id) = self.state.explorer.select_row(row) else {
                    return super::DispatchResult::changed(prev_focus != FocusTarget::Explorer);
                };
                self.activate_node(id);
                super::DispatchResult::changed(true)
            }
            Action::ExplorerContextMenuOpen { tree_row, x, y } => {
                if self.state.ui.input_dialog.visible || self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult::changed(false);
                }

                let mut state_changed = false;
                if !self.state.ui.sidebar_visible {
                    self.state.ui.sidebar_visible = true;
                    state_changed = true;
                }
                state_changed |= self.set_focus(FocusTarget::Explorer);

                let target = tree_row.and_then(|row| self.state.explorer.select_row(row));
                let items = context_menu_items(target.map(|id| self.state.tree.is_folder(id)));

                let prev = self.state.ui.explorer_context_menu.clone();
                self.state.ui.explorer_context_menu = ExplorerContextMenuState {
                    visible: true,
                    anchor: (x, y),
                    selected: 0,
                    items,
                    target,
                };
                state_changed |= self.state.ui.explorer_context_menu != prev;
                super::DispatchResult::changed(state_changed)
            }
            Action::ExplorerContextMenuClose => {
                if !self.state.ui.explorer_context_menu.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.explorer_context_menu = ExplorerContextMenuState::default();
                super::DispatchResult::changed(true)
            }
            Action::ExplorerContextMenuMoveSelection { delta } => {
                let menu = &mut self.state.ui.explorer_context_menu;
                if !menu.visible || delta == 0 || menu.items.is_empty() {
                    return super::DispatchResult::changed(false);
                }

                let len = menu.items.len() as isize;
                let current = menu.selected.min(menu.items.len() - 1) as isize;
                let next = (current + delta).rem_euclid(len) as usize;
                let changed = next != menu.selected;
                menu.selected = next;
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerContextMenuSetSelected { index } => {
                let menu = &mut self.state.ui.explorer_context_menu;
                if !menu.visible || menu.items.is_empty() {
                    return super::DispatchResult::changed(false);
                }
                let next = index.min(menu.items.len() - 1);
                let changed = next != menu.selected;
                menu.selected = next;
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerContextMenuConfirm => {
                let menu = std::mem::take(&mut self.state.ui.explorer_context_menu);
                if !menu.visible {
                    return super::DispatchResult::changed(false);
                }

                let Some(item) = menu.items.get(menu.selected).copied() else {
                    return super::DispatchResult::changed(true);
                };

                match (item, menu.target) {
                    (ExplorerContextMenuItem::NewFile, target) => {
                        self.open_create_dialog(NodeKind::File, target);
                    }
                    (ExplorerContextMenuItem::NewFolder, target) => {
                        self.open_create_dialog(NodeKind::Folder, target);
                    }
                    (ExplorerContextMenuItem::Rename, Some(id)) => {
                        self.open_rename_dialog(id);
                    }
                    (ExplorerContextMenuItem::Delete, Some(id)) => {
                        self.open_delete_confirm(id);
                    }
                    (ExplorerContextMenuItem::Rename | ExplorerContextMenuItem::Delete, None) => {}
                }
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }

    /// Folders toggle, files open.
    fn activate_node(&mut self, id: NodeId) -> bool {
        if self.state.tree.is_folder(id) {
            self.toggle_folder(id)
        } else {
            self.open_tab(id)
        }
    }
}

/// Folders offer creation inside them; files only rename/delete; empty space
/// creates at the top level.
fn context_menu_items(target_is_folder: Option<bool>) -> Vec<ExplorerContextMenuItem> {
    match target_is_folder {
        None => vec![
            ExplorerContextMenuItem::NewFile,
            ExplorerContextMenuItem::NewFolder,
        ],
        Some(true) => vec![
            ExplorerContextMenuItem::NewFile,
            ExplorerContextMenuItem::NewFolder,
            ExplorerContextMenuItem::Rename,
            ExplorerContextMenuItem::Delete,
        ],
        Some(false) => vec![
            ExplorerContextMenuItem::Rename,
            ExplorerContextMenuItem::Delete,
        ],
    }
}
