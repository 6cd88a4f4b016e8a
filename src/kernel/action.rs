use crate::core::Command;
use crate::kernel::chat::ReplyTicket;
use crate::kernel::editor::EditorAction;
use crate::kernel::tabs::TabKey;
use crate::models::{NodeId, NodeKind};

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    Editor(EditorAction),
    CreateNode {
        kind: NodeKind,
        name: String,
        parent: Option<NodeId>,
    },
    DeleteNode {
        id: NodeId,
    },
    RenameNode {
        id: NodeId,
        name: String,
    },
    ToggleFolder {
        id: NodeId,
    },
    OpenTab {
        id: NodeId,
    },
    CloseTab {
        tab: TabKey,
    },
    ActivateTab {
        tab: TabKey,
    },
    OpenWelcomeTab,
    SetBufferContent {
        id: NodeId,
        text: String,
    },
    SendChatMessage {
        text: String,
    },
    ChatReplyDue {
        ticket: ReplyTicket,
    },
    ChatInputAppend(char),
    ChatInputBackspace,
    ChatInputSubmit,
    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerClickRow {
        row: usize,
    },
    ExplorerContextMenuOpen {
        tree_row: Option<usize>,
        x: u16,
        y: u16,
    },
    ExplorerContextMenuClose,
    ExplorerContextMenuMoveSelection {
        delta: isize,
    },
    ExplorerContextMenuSetSelected {
        index: usize,
    },
    ExplorerContextMenuConfirm,
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    LogLine(String),
}
