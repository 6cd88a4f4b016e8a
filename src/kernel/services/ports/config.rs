use std::time::Duration;

use super::settings::{Settings, DEFAULT_CHAT_REPLY_DELAY_MS};

/// Runtime knobs read by the store and the workbench.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdeConfig {
    pub chat_reply_delay_ms: u64,
    pub tab_size: u8,
    pub explorer_indent: u16,
    pub scroll_lines: usize,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            chat_reply_delay_ms: DEFAULT_CHAT_REPLY_DELAY_MS,
            tab_size: 4,
            explorer_indent: 2,
            scroll_lines: 3,
        }
    }
}

impl IdeConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            chat_reply_delay_ms: settings.chat.reply_delay_ms,
            ..Self::default()
        }
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn scroll_step(&self) -> usize {
        self.scroll_lines.max(1)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
