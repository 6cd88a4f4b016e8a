//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
    Explorer,
    Chat,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            "explorer" | "sidebar" | "sidebar.explorer" => Some(Self::Explorer),
            "chat" | "assistant" => Some(Self::Chat),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
    explorer: FxHashMap<Key, Command>,
    chat: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
            explorer: default_explorer_keybindings(),
            chat: default_chat_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Explorer => {
                self.explorer.get(key).or_else(|| self.global.get(key))
            }
            KeybindingContext::Chat => self.chat.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// Applies user overrides; rules with an unknown key or context are skipped.
    /// An empty command unbinds the key.
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "unrecognized keybinding");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %name, "unknown keybinding context");
                        continue;
                    }
                },
            };

            if rule.command.trim().is_empty() {
                self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(&rule.command));
            }
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
            KeybindingContext::Explorer => &mut self.explorer,
            KeybindingContext::Chat => &mut self.chat,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Escape);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::CloseTab);
    bindings.insert(Key::ctrl(KeyCode::Tab), Command::NextTab);
    bindings.insert(Key::ctrl_shift(KeyCode::Tab), Command::PrevTab);
    bindings.insert(Key::ctrl(KeyCode::PageDown), Command::NextTab);
    bindings.insert(Key::ctrl(KeyCode::PageUp), Command::PrevTab);

    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::ToggleSidebar);
    bindings.insert(Key::ctrl(KeyCode::Char('l')), Command::ToggleChat);
    bindings.insert(Key::ctrl(KeyCode::Char('j')), Command::ToggleTerminal);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('e')), Command::FocusExplorer);
    bindings.insert(Key::ctrl(KeyCode::Char('e')), Command::FocusEditor);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('w')), Command::ShowWelcome);
    bindings.insert(Key::simple(KeyCode::F(2)), Command::ShowWelcome);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::OpenEscrowContract);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::NewFile);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('n')), Command::NewFolder);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings
}

fn default_explorer_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Up), Command::ExplorerUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::ExplorerDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Right), Command::ExplorerActivate);
    bindings.insert(Key::simple(KeyCode::Left), Command::ExplorerCollapse);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::ExplorerScrollUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::ExplorerScrollDown);
    bindings.insert(Key::simple(KeyCode::Char('a')), Command::ExplorerNewFile);
    bindings.insert(Key::shift(KeyCode::Char('a')), Command::ExplorerNewFolder);
    bindings.insert(Key::simple(KeyCode::Char('r')), Command::ExplorerRename);
    bindings.insert(Key::simple(KeyCode::F(2)), Command::ExplorerRename);
    bindings.insert(Key::simple(KeyCode::Char('d')), Command::ExplorerDelete);
    bindings.insert(Key::simple(KeyCode::Delete), Command::ExplorerDelete);
    bindings.insert(Key::simple(KeyCode::Char('m')), Command::ExplorerContextMenu);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_chat_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::simple(KeyCode::Enter), Command::ChatSend);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::ChatBackspace);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
