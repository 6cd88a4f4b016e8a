use super::Workbench;
use crate::core::event::{InputEvent, Key};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, EditorAction, FocusTarget};
use crate::tui::view::EventResult;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let result = match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse(mouse_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Resize(_, _) => EventResult::Consumed,
    };

    if workbench.should_quit() {
        return EventResult::Quit;
    }
    result
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}

impl Workbench {
    fn keybinding_context(&self) -> KeybindingContext {
        match self.store.state().ui.focus {
            FocusTarget::Explorer => KeybindingContext::Explorer,
            FocusTarget::Editor => KeybindingContext::Editor,
            FocusTarget::Chat => KeybindingContext::Chat,
        }
    }

    pub(super) fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        if key_event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        if self.store.state().ui.explorer_context_menu.visible {
            match key_event.code {
                KeyCode::Esc => {
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
                    return EventResult::Consumed;
                }
                KeyCode::Up => {
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuMoveSelection {
                        delta: -1,
                    });
                    return EventResult::Consumed;
                }
                KeyCode::Down => {
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuMoveSelection {
                        delta: 1,
                    });
                    return EventResult::Consumed;
                }
                KeyCode::Enter => {
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuConfirm);
                    return EventResult::Consumed;
                }
                _ => {
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
                }
            }
        }

        if self.store.state().ui.input_dialog.visible {
            let action = match (key_event.code, key_event.modifiers) {
                (KeyCode::Enter, _) => Some(KernelAction::InputDialogAccept),
                (KeyCode::Esc, _) => Some(KernelAction::InputDialogCancel),
                (KeyCode::Backspace, _) => Some(KernelAction::InputDialogBackspace),
                (KeyCode::Left, _) => Some(KernelAction::InputDialogCursorLeft),
                (KeyCode::Right, _) => Some(KernelAction::InputDialogCursorRight),
                (KeyCode::Char(ch), mods) if is_text_input(mods) => {
                    Some(KernelAction::InputDialogAppend(ch))
                }
                _ => None,
            };
            if let Some(action) = action {
                let _ = self.dispatch_kernel(action);
            }
            return EventResult::Consumed;
        }

        if self.store.state().ui.confirm_dialog.visible {
            match key_event.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    let _ = self.dispatch_kernel(KernelAction::ConfirmDialogAccept);
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    let _ = self.dispatch_kernel(KernelAction::ConfirmDialogCancel);
                }
                _ => {}
            }
            return EventResult::Consumed;
        }

        let key = Key::from(*key_event);
        let context = self.keybinding_context();
        if let Some(command) = self.keybindings.resolve(context, &key).cloned() {
            tracing::trace!(command = command.name(), ?context, "key resolved");
            self.run_command(command);
            return EventResult::Consumed;
        }

        let KeyCode::Char(ch) = key_event.code else {
            return EventResult::Ignored;
        };
        if !is_text_input(key_event.modifiers) {
            return EventResult::Ignored;
        }

        let changed = match self.store.state().ui.focus {
            FocusTarget::Editor => {
                self.editor_viewport.detached = false;
                self.dispatch_kernel(KernelAction::Editor(EditorAction::InsertChar(ch)))
            }
            FocusTarget::Chat => self.dispatch_kernel(KernelAction::ChatInputAppend(ch)),
            FocusTarget::Explorer => false,
        };
        EventResult::from_changed(changed)
    }

    pub(super) fn run_command(&mut self, command: Command) -> bool {
        if command.is_edit_command() || self.store.state().ui.focus == FocusTarget::Editor {
            self.editor_viewport.detached = false;
        }

        // The kernel has no screen geometry; anchor the keyboard-opened menu
        // next to the selected row here.
        if command == Command::ExplorerContextMenu {
            if let Some(tree) = self.hits.explorer_tree {
                let explorer = &self.store.state().explorer;
                let tree_row = explorer.selected_row_index();
                let offset = tree_row
                    .map(|row| row.saturating_sub(explorer.scroll_offset))
                    .unwrap_or(0);
                let offset = u16::try_from(offset).unwrap_or(u16::MAX);
                return self.dispatch_kernel(KernelAction::ExplorerContextMenuOpen {
                    tree_row,
                    x: tree.x.saturating_add(2),
                    y: tree.y.saturating_add(offset).saturating_add(1),
                });
            }
        }

        self.dispatch_kernel(KernelAction::RunCommand(command))
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        let ui = &self.store.state().ui;
        let (dialog_open, has_modal, focus) = (ui.input_dialog.visible, ui.has_modal(), ui.focus);
        if dialog_open {
            let mut changed = false;
            for ch in text.chars().filter(|c| !c.is_control()) {
                changed |= self.dispatch_kernel(KernelAction::InputDialogAppend(ch));
            }
            return EventResult::from_changed(changed);
        }
        if has_modal {
            return EventResult::Ignored;
        }

        let changed = match focus {
            FocusTarget::Editor => {
                self.editor_viewport.detached = false;
                let text = text.replace("\r\n", "\n");
                self.dispatch_kernel(KernelAction::Editor(EditorAction::InsertText(text)))
            }
            FocusTarget::Chat => {
                let mut changed = false;
                for ch in text.chars().filter(|c| !c.is_control()) {
                    changed |= self.dispatch_kernel(KernelAction::ChatInputAppend(ch));
                }
                changed
            }
            FocusTarget::Explorer => false,
        };
        EventResult::from_changed(changed)
    }
}
