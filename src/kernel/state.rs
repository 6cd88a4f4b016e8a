use rustc_hash::FxHashMap;

use crate::models::{NodeId, ProjectTree, ProjectTreeRow};

use super::buffers::BufferStore;
use super::chat::ChatSession;
use super::services::ports::IdeConfig;
use super::tabs::{TabKey, TabSet, WELCOME_TAB_TITLE};
use super::terminal::TerminalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialogKind {
    NewFile { parent: Option<NodeId> },
    NewFolder { parent: Option<NodeId> },
    Rename { id: NodeId },
}

impl InputDialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            InputDialogKind::NewFile { .. } => "New File",
            InputDialogKind::NewFolder { .. } => "New Folder",
            InputDialogKind::Rename { .. } => "Rename",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            InputDialogKind::NewFile { .. } => "filename.rs",
            InputDialogKind::NewFolder { .. } => "folder-name",
            InputDialogKind::Rename { .. } => "new name",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    /// Byte offset into `value`.
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn open(&mut self, kind: InputDialogKind, value: String) {
        self.visible = true;
        self.title = kind.title().to_string();
        self.cursor = value.len();
        self.value = value;
        self.error = None;
        self.kind = Some(kind);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteNode { id: NodeId },
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerContextMenuItem {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ExplorerContextMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            ExplorerContextMenuItem::NewFile => "New File",
            ExplorerContextMenuItem::NewFolder => "New Folder",
            ExplorerContextMenuItem::Rename => "Rename",
            ExplorerContextMenuItem::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplorerContextMenuState {
    pub visible: bool,
    pub anchor: (u16, u16),
    pub selected: usize,
    pub items: Vec<ExplorerContextMenuItem>,
    /// Node the menu was opened on; `None` targets the top level.
    pub target: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub sidebar_visible: bool,
    pub chat_visible: bool,
    pub terminal_visible: bool,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub explorer_context_menu: ExplorerContextMenuState,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Explorer,
            sidebar_visible: true,
            chat_visible: false,
            terminal_visible: false,
            input_dialog: InputDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            explorer_context_menu: ExplorerContextMenuState::default(),
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn has_modal(&self) -> bool {
        self.input_dialog.visible
            || self.confirm_dialog.visible
            || self.explorer_context_menu.visible
    }
}

#[derive(Debug)]
pub struct AppState {
    pub tree: ProjectTree,
    pub buffers: BufferStore,
    pub tabs: TabSet,
    pub chat: ChatSession,
    pub terminal: TerminalState,
    pub explorer: ExplorerState,
    pub ui: UiState,
    pub config: IdeConfig,
}

impl AppState {
    pub fn new(tree: ProjectTree, buffers: BufferStore, config: IdeConfig) -> Self {
        let explorer = ExplorerState::new(&tree);
        Self {
            tree,
            buffers,
            tabs: TabSet::new(),
            chat: ChatSession::new(),
            terminal: TerminalState::default(),
            explorer,
            ui: UiState::default(),
            config,
        }
    }

    /// Label shown on a tab; file tabs follow renames.
    pub fn tab_title(&self, tab: TabKey) -> String {
        match tab {
            TabKey::Welcome => WELCOME_TAB_TITLE.to_string(),
            TabKey::File(id) => self
                .tree
                .name(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{id}")),
        }
    }
}

/// Projection of the tree into visible rows, plus selection and scroll.
#[derive(Debug)]
pub struct ExplorerState {
    pub view_height: usize,
    pub scroll_offset: usize,
    pub rows: Vec<ProjectTreeRow>,
    selected: Option<NodeId>,
    index_by_id: FxHashMap<NodeId, usize>,
}

impl ExplorerState {
    pub fn new(tree: &ProjectTree) -> Self {
        let mut state = Self {
            view_height: 10,
            scroll_offset: 0,
            rows: Vec::new(),
            selected: None,
            index_by_id: FxHashMap::default(),
        };
        state.refresh_rows(tree);
        state
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn set_selected(&mut self, id: Option<NodeId>) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id;
        if let Some(index) = id.and_then(|id| self.index_by_id.get(&id).copied()) {
            self.keep_row_visible(index);
        }
        true
    }

    pub fn row_index_of(&self, id: NodeId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn selected_row_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.row_index_of(id))
    }

    pub fn row_id(&self, row: usize) -> Option<NodeId> {
        self.rows.get(row).map(|r| r.id)
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;

        match self.selected_row_index() {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let Some(current_index) = self.selected_row_index() else {
            let new_index = if delta < 0 { self.rows.len() - 1 } else { 0 };
            self.selected = Some(self.rows[new_index].id);
            self.keep_row_visible(new_index);
            return true;
        };

        let new_index = if delta < 0 {
            current_index.saturating_sub(delta.unsigned_abs())
        } else {
            (current_index + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == current_index {
            return false;
        }

        self.selected = Some(self.rows[new_index].id);
        self.keep_row_visible(new_index);
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;

        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }

        self.scroll_offset != prev
    }

    pub fn select_row(&mut self, row: usize) -> Option<NodeId> {
        let id = self.row_id(row)?;
        self.selected = Some(id);
        self.keep_row_visible(row);
        Some(id)
    }

    /// Folder a new node should go into when created from the selection:
    /// the selected folder itself, or the parent of the selected file.
    pub fn create_parent(&self, tree: &ProjectTree) -> Option<NodeId> {
        let id = self.selected?;
        let node = tree.find(id)?;
        if node.is_folder() {
            Some(id)
        } else {
            node.parent()
        }
    }

    /// Rebuilds rows after any tree mutation; drops a selection whose node is gone.
    pub fn refresh_rows(&mut self, tree: &ProjectTree) {
        self.rows = tree.flatten_for_view();

        self.index_by_id.clear();
        self.index_by_id.reserve(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            self.index_by_id.insert(row.id, i);
        }

        if self.selected.is_some_and(|id| !tree.contains(id)) {
            self.selected = None;
        }

        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let view_height = self.view_height.max(1);
        let max_scroll = self.rows.len().saturating_sub(view_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);

        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
            self.clamp_scroll();
            return;
        }

        if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = row_index.saturating_sub(view_height - 1);
        }

        self.clamp_scroll();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
