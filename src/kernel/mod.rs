//! Headless application core (state/action/effect).

pub mod action;
pub mod buffers;
pub mod chat;
pub mod demo;
pub mod editor;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;
pub mod tabs;
pub mod terminal;

pub use action::Action;
pub use buffers::{Buffer, BufferStore, CursorMotion};
pub use chat::{ChatMessage, ChatRole, ChatSession, ReplyTicket};
pub use editor::EditorAction;
pub use effect::Effect;
pub use language::{language_hint, LanguageId};
pub use state::{
    AppState, ConfirmDialogState, ExplorerContextMenuItem, ExplorerContextMenuState,
    ExplorerState, FocusTarget, InputDialogKind, InputDialogState, PendingAction, UiState,
};
pub use store::{DispatchResult, Store};
pub use tabs::{TabKey, TabSet};
