//! 命令系统：语义命令定义
//!
//! Command 是与按键无关的语义命令；按键到命令的映射由 KeybindingService 负责。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,

    // ==================== 编辑操作 ====================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 标签页 ====================
    CloseTab,
    NextTab,
    PrevTab,
    ShowWelcome,
    OpenEscrowContract,

    // ==================== 资源管理器 ====================
    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerScrollUp,
    ExplorerScrollDown,
    ExplorerNewFile,
    ExplorerNewFolder,
    ExplorerRename,
    ExplorerDelete,
    ExplorerContextMenu,
    NewFile,
    NewFolder,

    // ==================== 聊天 ====================
    ChatSend,
    ChatBackspace,

    // ==================== 视图操作 ====================
    ToggleSidebar,
    ToggleChat,
    ToggleTerminal,
    FocusExplorer,
    FocusEditor,
    FocusChat,
    Escape,

    // ==================== 系统操作 ====================
    Quit,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::CloseTab => "closeTab",
            Command::NextTab => "nextTab",
            Command::PrevTab => "prevTab",
            Command::ShowWelcome => "showWelcome",
            Command::OpenEscrowContract => "openEscrowContract",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::ExplorerCollapse => "explorerCollapse",
            Command::ExplorerScrollUp => "explorerScrollUp",
            Command::ExplorerScrollDown => "explorerScrollDown",
            Command::ExplorerNewFile => "explorerNewFile",
            Command::ExplorerNewFolder => "explorerNewFolder",
            Command::ExplorerRename => "explorerRename",
            Command::ExplorerDelete => "explorerDelete",
            Command::ExplorerContextMenu => "explorerContextMenu",
            Command::NewFile => "newFile",
            Command::NewFolder => "newFolder",
            Command::ChatSend => "chatSend",
            Command::ChatBackspace => "chatBackspace",
            Command::ToggleSidebar => "toggleSidebar",
            Command::ToggleChat => "toggleChat",
            Command::ToggleTerminal => "toggleTerminal",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::FocusChat => "focusChat",
            Command::Escape => "escape",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]; unknown names become `Custom`.
    pub fn from_name(name: &str) -> Command {
        match name.trim() {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "closeTab" => Command::CloseTab,
            "nextTab" => Command::NextTab,
            "prevTab" => Command::PrevTab,
            "showWelcome" => Command::ShowWelcome,
            "openEscrowContract" => Command::OpenEscrowContract,
            "explorerUp" => Command::ExplorerUp,
            "explorerDown" => Command::ExplorerDown,
            "explorerActivate" => Command::ExplorerActivate,
            "explorerCollapse" => Command::ExplorerCollapse,
            "explorerScrollUp" => Command::ExplorerScrollUp,
            "explorerScrollDown" => Command::ExplorerScrollDown,
            "explorerNewFile" => Command::ExplorerNewFile,
            "explorerNewFolder" => Command::ExplorerNewFolder,
            "explorerRename" => Command::ExplorerRename,
            "explorerDelete" => Command::ExplorerDelete,
            "explorerContextMenu" => Command::ExplorerContextMenu,
            "newFile" => Command::NewFile,
            "newFolder" => Command::NewFolder,
            "chatSend" => Command::ChatSend,
            "chatBackspace" => Command::ChatBackspace,
            "toggleSidebar" => Command::ToggleSidebar,
            "toggleChat" => Command::ToggleChat,
            "toggleTerminal" => Command::ToggleTerminal,
            "focusExplorer" => Command::FocusExplorer,
            "focusEditor" => Command::FocusEditor,
            "focusChat" => Command::FocusChat,
            "escape" => Command::Escape,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
