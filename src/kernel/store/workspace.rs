use crate::kernel::buffers::new_file_template;
use crate::kernel::tabs::TabKey;
use crate::kernel::Action;
use crate::models::{NodeId, NodeKind, ProjectTreeError};

impl super::Store {
    pub(super) fn reduce_workspace_action(&mut self, action: Action) -> super::DispatchResult {
        let state_changed = match action {
            Action::CreateNode { kind, name, parent } => {
                match self.insert_node(kind, &name, parent) {
                    Ok(_) => true,
                    Err(err) => {
                        tracing::warn!(name = %name, error = %err, "create rejected");
                        false
                    }
                }
            }
            Action::DeleteNode { id } => self.remove_node(id),
            Action::RenameNode { id, name } => match self.relabel_node(id, &name) {
                Ok(changed) => changed,
                Err(err) => {
                    tracing::warn!(%id, name = %name, error = %err, "rename rejected");
                    false
                }
            },
            Action::ToggleFolder { id } => self.toggle_folder(id),
            Action::OpenTab { id } => self.open_tab(id),
            Action::CloseTab { tab } => self.close_tab(tab),
            Action::ActivateTab { tab } => self.activate_tab(tab),
            Action::OpenWelcomeTab => self.open_welcome_tab(),
            Action::SetBufferContent { id, text } => self.set_buffer_content(id, &text),
            _ => unreachable!("non-workspace action passed to reduce_workspace_action"),
        };

        super::DispatchResult::changed(state_changed)
    }

    pub(super) fn insert_node(
        &mut self,
        kind: NodeKind,
        name: &str,
        parent: Option<NodeId>,
    ) -> Result<NodeId, ProjectTreeError> {
        let id = self.state.tree.insert_under(parent, name, kind)?;
        tracing::debug!(%id, ?kind, ?parent, "node created");

        if kind == NodeKind::File {
            let extension = self
                .state
                .tree
                .find(id)
                .and_then(|node| node.extension())
                .unwrap_or_default();
            let template = new_file_template(extension);
            self.state.buffers.set_content(id, &template);
        }

        self.state.explorer.refresh_rows(&self.state.tree);
        if kind == NodeKind::File {
            self.open_tab(id);
        }
        Ok(id)
    }

    pub(super) fn remove_node(&mut self, id: NodeId) -> bool {
        let files = self.state.tree.descendant_files(id);
        let Some(removed) = self.state.tree.remove(id) else {
            tracing::debug!(%id, "delete of unknown node ignored");
            return false;
        };

        for file in files {
            self.close_tab(TabKey::File(file));
            self.state.buffers.remove(file);
        }

        self.state.explorer.refresh_rows(&self.state.tree);
        tracing::debug!(%id, removed = removed.len(), "node deleted");
        true
    }

    /// Returns `Ok(false)` when the name did not change.
    pub(super) fn relabel_node(&mut self, id: NodeId, name: &str) -> Result<bool, ProjectTreeError> {
        let changed = self.state.tree.rename(id, name)?;
        if changed {
            self.state.explorer.refresh_rows(&self.state.tree);
            tracing::debug!(%id, "node renamed");
        }
        Ok(changed)
    }
}
