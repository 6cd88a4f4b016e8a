use crate::core::Command;
use crate::models::{NodeId, NodeKind, ProjectTreeError};

use super::buffers::CursorMotion;
use super::tabs::TabKey;
use super::{Action, AppState, Effect, EditorAction, FocusTarget};

mod chat;
mod editor;
mod explorer;
mod input_dialog;
mod workspace;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Editor(editor_action) => self.reduce_editor_action(editor_action),
            action @ (Action::CreateNode { .. }
            | Action::DeleteNode { .. }
            | Action::RenameNode { .. }
            | Action::ToggleFolder { .. }
            | Action::OpenTab { .. }
            | Action::CloseTab { .. }
            | Action::ActivateTab { .. }
            | Action::OpenWelcomeTab
            | Action::SetBufferContent { .. }) => self.reduce_workspace_action(action),
            action @ (Action::SendChatMessage { .. }
            | Action::ChatReplyDue { .. }
            | Action::ChatInputAppend(_)
            | Action::ChatInputBackspace
            | Action::ChatInputSubmit) => self.reduce_chat_action(action),
            action @ (Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerClickRow { .. }
            | Action::ExplorerContextMenuOpen { .. }
            | Action::ExplorerContextMenuClose
            | Action::ExplorerContextMenuMoveSelection { .. }
            | Action::ExplorerContextMenuSetSelected { .. }
            | Action::ExplorerContextMenuConfirm) => self.reduce_explorer_action(action),
            action @ (Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel
            | Action::ConfirmDialogAccept
            | Action::ConfirmDialogCancel) => self.reduce_input_dialog_action(action),
            Action::LogLine(line) => {
                self.state.terminal.push_log(line);
                DispatchResult::changed(self.state.ui.terminal_visible)
            }
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        let mut effects = Vec::new();

        let state_changed = match command {
            Command::Quit => {
                if let Some(ticket) = self.state.chat.cancel_pending() {
                    effects.push(Effect::CancelChatReply { ticket });
                }
                self.state.ui.should_quit = true;
                true
            }
            Command::Escape => self.escape(),
            Command::ToggleSidebar => {
                self.state.ui.sidebar_visible = !self.state.ui.sidebar_visible;
                if !self.state.ui.sidebar_visible && self.state.ui.focus == FocusTarget::Explorer {
                    self.state.ui.focus = FocusTarget::Editor;
                }
                true
            }
            Command::ToggleChat => {
                self.state.ui.chat_visible = !self.state.ui.chat_visible;
                if self.state.ui.chat_visible {
                    self.state.ui.focus = FocusTarget::Chat;
                } else if self.state.ui.focus == FocusTarget::Chat {
                    self.state.ui.focus = FocusTarget::Editor;
                }
                true
            }
            Command::ToggleTerminal => {
                self.state.ui.terminal_visible = !self.state.ui.terminal_visible;
                true
            }
            Command::FocusExplorer => {
                let changed = !self.state.ui.sidebar_visible
                    || self.state.ui.focus != FocusTarget::Explorer;
                self.state.ui.sidebar_visible = true;
                self.state.ui.focus = FocusTarget::Explorer;
                changed
            }
            Command::FocusEditor => self.set_focus(FocusTarget::Editor),
            Command::FocusChat => {
                let changed =
                    !self.state.ui.chat_visible || self.state.ui.focus != FocusTarget::Chat;
                self.state.ui.chat_visible = true;
                self.state.ui.focus = FocusTarget::Chat;
                changed
            }
            Command::CloseTab => match self.state.tabs.active() {
                Some(tab) => self.close_tab(tab),
                None => false,
            },
            Command::NextTab => self.state.tabs.next(),
            Command::PrevTab => self.state.tabs.prev(),
            Command::ShowWelcome => self.open_welcome_tab(),
            Command::OpenEscrowContract => match self.state.tree.find_file_by_name("escrow.rs") {
                Some(id) => {
                    let opened = self.open_tab(id);
                    self.set_focus(FocusTarget::Editor) || opened
                }
                None => {
                    tracing::warn!("escrow contract is not in the project");
                    false
                }
            },
            Command::ExplorerUp => self.state.explorer.move_selection(-1),
            Command::ExplorerDown => self.state.explorer.move_selection(1),
            Command::ExplorerScrollUp => {
                let step = self.state.explorer.view_height.max(1) as isize;
                self.state.explorer.move_selection(-step)
            }
            Command::ExplorerScrollDown => {
                let step = self.state.explorer.view_height.max(1) as isize;
                self.state.explorer.move_selection(step)
            }
            Command::ExplorerActivate => return self.dispatch(Action::ExplorerActivate),
            Command::ExplorerCollapse => return self.dispatch(Action::ExplorerCollapse),
            Command::ExplorerNewFile => {
                let parent = self.state.explorer.create_parent(&self.state.tree);
                self.open_create_dialog(NodeKind::File, parent)
            }
            Command::ExplorerNewFolder => {
                let parent = self.state.explorer.create_parent(&self.state.tree);
                self.open_create_dialog(NodeKind::Folder, parent)
            }
            Command::NewFile => self.open_create_dialog(NodeKind::File, None),
            Command::NewFolder => self.open_create_dialog(NodeKind::Folder, None),
            Command::ExplorerRename => match self.state.explorer.selected() {
                Some(id) => self.open_rename_dialog(id),
                None => false,
            },
            Command::ExplorerDelete => match self.state.explorer.selected() {
                Some(id) => self.open_delete_confirm(id),
                None => false,
            },
            Command::ExplorerContextMenu => {
                let tree_row = self.state.explorer.selected_row_index();
                let y = tree_row
                    .map(|row| row.saturating_sub(self.state.explorer.scroll_offset))
                    .unwrap_or(0);
                return self.dispatch(Action::ExplorerContextMenuOpen {
                    tree_row,
                    x: 2,
                    y: u16::try_from(y).unwrap_or(u16::MAX),
                });
            }
            Command::CursorLeft => return self.move_cursor(CursorMotion::Left),
            Command::CursorRight => return self.move_cursor(CursorMotion::Right),
            Command::CursorUp => return self.move_cursor(CursorMotion::Up),
            Command::CursorDown => return self.move_cursor(CursorMotion::Down),
            Command::CursorLineStart => return self.move_cursor(CursorMotion::LineStart),
            Command::CursorLineEnd => return self.move_cursor(CursorMotion::LineEnd),
            Command::CursorFileStart => return self.move_cursor(CursorMotion::FileStart),
            Command::CursorFileEnd => return self.move_cursor(CursorMotion::FileEnd),
            Command::InsertNewline => {
                return self.reduce_editor_action(EditorAction::InsertNewline);
            }
            Command::InsertTab => {
                let indent = " ".repeat(usize::from(self.state.config.tab_size.max(1)));
                return self.reduce_editor_action(EditorAction::InsertText(indent));
            }
            Command::DeleteBackward => {
                return self.reduce_editor_action(EditorAction::DeleteBackward);
            }
            Command::DeleteForward => {
                return self.reduce_editor_action(EditorAction::DeleteForward);
            }
            Command::ChatSend => return self.dispatch(Action::ChatInputSubmit),
            Command::ChatBackspace => return self.dispatch(Action::ChatInputBackspace),
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                false
            }
        };

        DispatchResult {
            effects,
            state_changed,
        }
    }

    fn move_cursor(&mut self, motion: CursorMotion) -> DispatchResult {
        self.reduce_editor_action(EditorAction::MoveCursor(motion))
    }

    fn set_focus(&mut self, focus: FocusTarget) -> bool {
        if self.state.ui.focus == focus {
            return false;
        }
        self.state.ui.focus = focus;
        true
    }

    /// Closes the topmost overlay, innermost first.
    fn escape(&mut self) -> bool {
        let ui = &mut self.state.ui;
        if ui.explorer_context_menu.visible {
            ui.explorer_context_menu = Default::default();
            return true;
        }
        if ui.input_dialog.visible {
            ui.input_dialog.reset();
            return true;
        }
        if ui.confirm_dialog.visible {
            ui.confirm_dialog = Default::default();
            return true;
        }
        if ui.focus == FocusTarget::Chat {
            ui.focus = FocusTarget::Editor;
            return true;
        }
        false
    }

    // ==================== 外部接口 ====================

    /// Creates a node under `parent` (top level for `None`). New files get the
    /// template buffer and are opened as the active tab.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        name: &str,
        parent: Option<NodeId>,
    ) -> Result<NodeId, ProjectTreeError> {
        self.insert_node(kind, name, parent)
    }

    /// Deletes a node and its subtree, closing their tabs and dropping their
    /// buffers. Unknown ids are ignored.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        self.remove_node(id)
    }

    pub fn rename_node(&mut self, id: NodeId, name: &str) -> Result<(), ProjectTreeError> {
        self.relabel_node(id, name).map(|_| ())
    }

    pub fn toggle_folder(&mut self, id: NodeId) -> bool {
        let changed = self.state.tree.toggle_expanded(id);
        if changed {
            self.state.explorer.refresh_rows(&self.state.tree);
        }
        changed
    }

    /// Opens a file tab and selects the node. Folders are ignored.
    pub fn open_tab(&mut self, id: NodeId) -> bool {
        if !self.state.tree.is_file(id) {
            return false;
        }
        self.state.buffers.ensure(id);
        let opened = self.state.tabs.open(TabKey::File(id));
        let selected = self.state.explorer.set_selected(Some(id));
        opened || selected
    }

    /// Closes a tab. When nothing stays active the explorer selection is cleared.
    pub fn close_tab(&mut self, tab: TabKey) -> bool {
        if !self.state.tabs.close(tab) {
            return false;
        }
        if self.state.tabs.active().is_none() {
            self.state.explorer.set_selected(None);
        }
        true
    }

    pub fn activate_tab(&mut self, tab: TabKey) -> bool {
        self.state.tabs.activate(tab)
    }

    pub fn open_welcome_tab(&mut self) -> bool {
        self.state.tabs.open(TabKey::Welcome)
    }

    /// Overwrites a file's buffer. Tabs are left alone.
    pub fn set_buffer_content(&mut self, id: NodeId, text: &str) -> bool {
        if !self.state.tree.is_file(id) {
            tracing::warn!(%id, "set_buffer_content on a node that is not a file");
            return false;
        }
        self.state.buffers.set_content(id, text);
        true
    }

    /// Appends a user message and returns the effects that schedule the reply.
    pub fn send_chat_message(&mut self, text: &str) -> Vec<Effect> {
        self.dispatch(Action::SendChatMessage {
            text: text.to_string(),
        })
        .effects
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
