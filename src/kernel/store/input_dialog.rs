use crate::kernel::state::{ConfirmDialogState, InputDialogKind, PendingAction};
use crate::kernel::{Action, FocusTarget};
use crate::models::{validate_name, NodeId, NodeKind, ProjectTreeError};

fn dialog_error(err: &ProjectTreeError) -> &'static str {
    match err {
        ProjectTreeError::EmptyName => "Name required",
        ProjectTreeError::InvalidName => "Invalid name",
        ProjectTreeError::ParentNotFound(_) => "Parent folder no longer exists",
        ProjectTreeError::NodeNotFound(_) => "Item no longer exists",
    }
}

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || ch.is_control() {
                    return super::DispatchResult::changed(false);
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::changed(false);
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::changed(false);
                }

                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != dialog.cursor;
                dialog.cursor = prev;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult::changed(false);
                }

                let next = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                let changed = next != dialog.cursor;
                dialog.cursor = next;
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogAccept => self.accept_input_dialog(),
            Action::InputDialogCancel => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::ConfirmDialogAccept => {
                let dialog = std::mem::take(&mut self.state.ui.confirm_dialog);
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                if let Some(PendingAction::DeleteNode { id }) = dialog.on_confirm {
                    self.remove_node(id);
                }
                super::DispatchResult::changed(true)
            }
            Action::ConfirmDialogCancel => {
                if !self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.confirm_dialog = ConfirmDialogState::default();
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-input-dialog action passed to reduce_input_dialog_action"),
        }
    }

    fn accept_input_dialog(&mut self) -> super::DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return super::DispatchResult::changed(false);
        }

        let Some(kind) = dialog.kind else {
            dialog.reset();
            return super::DispatchResult::changed(true);
        };

        let value = match validate_name(&dialog.value) {
            Ok(value) => value.to_string(),
            Err(err) => {
                let prev = dialog.error.replace(dialog_error(&err).to_string());
                return super::DispatchResult::changed(
                    prev.as_deref() != dialog.error.as_deref(),
                );
            }
        };

        let result = match kind {
            InputDialogKind::NewFile { parent } => {
                self.insert_node(NodeKind::File, &value, parent).map(|_| ())
            }
            InputDialogKind::NewFolder { parent } => {
                self.insert_node(NodeKind::Folder, &value, parent).map(|_| ())
            }
            InputDialogKind::Rename { id } => self.relabel_node(id, &value).map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.state.ui.input_dialog.reset();
                if matches!(kind, InputDialogKind::NewFile { .. }) {
                    self.state.ui.focus = FocusTarget::Editor;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, ?kind, "input dialog rejected");
                self.state.ui.input_dialog.error = Some(dialog_error(&err).to_string());
            }
        }
        super::DispatchResult::changed(true)
    }

    pub(super) fn open_create_dialog(&mut self, kind: NodeKind, parent: Option<NodeId>) -> bool {
        if self.state.ui.has_modal() {
            return false;
        }
        let kind = match kind {
            NodeKind::File => InputDialogKind::NewFile { parent },
            NodeKind::Folder => InputDialogKind::NewFolder { parent },
        };
        self.state.ui.input_dialog.open(kind, String::new());
        true
    }

    pub(super) fn open_rename_dialog(&mut self, id: NodeId) -> bool {
        if self.state.ui.has_modal() {
            return false;
        }
        let Some(name) = self.state.tree.name(id) else {
            return false;
        };
        let name = name.to_string();
        self.state
            .ui
            .input_dialog
            .open(InputDialogKind::Rename { id }, name);
        true
    }

    pub(super) fn open_delete_confirm(&mut self, id: NodeId) -> bool {
        if self.state.ui.has_modal() {
            return false;
        }
        let Some(name) = self.state.tree.name(id) else {
            return false;
        };
        self.state.ui.confirm_dialog = ConfirmDialogState {
            visible: true,
            message: format!("Delete {name}?"),
            on_confirm: Some(PendingAction::DeleteNode { id }),
        };
        true
    }
}
