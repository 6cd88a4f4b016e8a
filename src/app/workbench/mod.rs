//! 工作台模块：持有内核 Store，分发输入，渲染各面板

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingService};
use crate::kernel::{Action as KernelAction, AppState, FocusTarget, Store, TabKey};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::mpsc::Receiver;

mod input;
mod mouse;
mod render;
mod tick;
mod util;

const MAX_LOG_DRAIN_PER_TICK: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WelcomeAction {
    OpenEscrow,
    OpenChat,
    OpenTerminal,
}

#[derive(Debug, Clone, Copy)]
struct TabHit {
    tab: TabKey,
    area: Rect,
    close: Rect,
}

/// Regions of the last frame, for mouse hit-testing. Rebuilt on every render.
#[derive(Debug, Default)]
struct HitMap {
    render_area: Option<Rect>,
    explorer_new_file: Option<Rect>,
    explorer_new_folder: Option<Rect>,
    explorer_tree: Option<Rect>,
    sidebar: Option<Rect>,
    tabs: Vec<TabHit>,
    editor: Option<Rect>,
    editor_text: Option<Rect>,
    welcome_actions: Vec<(WelcomeAction, Rect)>,
    show_welcome: Option<Rect>,
    chat: Option<Rect>,
    chat_close: Option<Rect>,
    chat_input: Option<Rect>,
    chat_send: Option<Rect>,
    terminal: Option<Rect>,
    terminal_close: Option<Rect>,
    context_menu: Option<Rect>,
}

/// Sizes measured while rendering, pushed into the kernel afterwards.
#[derive(Debug, Default)]
struct ViewportCache {
    explorer_view_height: Option<u16>,
    applied_explorer_view_height: Option<u16>,
}

/// Vertical scroll of the editor pane. Keyboard edits pull the viewport to the
/// cursor; mouse wheel scrolling detaches it until the next edit.
#[derive(Debug, Default)]
struct EditorViewport {
    tab: Option<TabKey>,
    scroll: usize,
    detached: bool,
}

/// Scroll of the chat transcript. Sticks to the newest message until the
/// wheel detaches it; a new message or scrolling back to the end re-attaches.
#[derive(Debug, Default)]
struct ChatViewport {
    scroll: usize,
    max_scroll: usize,
    detached: bool,
    seen_messages: usize,
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    runtime: AsyncRuntime,
    log_rx: Option<Receiver<String>>,
    hits: HitMap,
    viewport_cache: ViewportCache,
    editor_viewport: EditorViewport,
    chat_viewport: ChatViewport,
}

impl Workbench {
    pub fn new(
        state: AppState,
        keybindings: KeybindingService,
        runtime: AsyncRuntime,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        Self {
            store: Store::new(state),
            keybindings,
            theme: UiTheme::default(),
            runtime,
            log_rx,
            hits: HitMap::default(),
            viewport_cache: ViewportCache::default(),
            editor_viewport: EditorViewport::default(),
            chat_viewport: ChatViewport::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn runtime(&self) -> &AsyncRuntime {
        &self.runtime
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn sidebar_visible(&self) -> bool {
        self.store.state().ui.sidebar_visible
    }

    pub fn chat_visible(&self) -> bool {
        self.store.state().ui.chat_visible
    }

    pub fn terminal_visible(&self) -> bool {
        self.store.state().ui.terminal_visible
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Runs an action through the store and hands its effects to the runtime.
    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.runtime.apply(effect);
        }
        result.state_changed
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::ChatReplyDue { ticket } => {
                self.dispatch_kernel(KernelAction::ChatReplyDue { ticket })
            }
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
