//! 核心抽象
//!
//! - Command: 与按键无关的语义命令
//! - Event: 终端输入事件（仅 tui 特性下可用）

pub mod command;
#[cfg(feature = "tui")]
pub mod event;

pub use command::Command;
#[cfg(feature = "tui")]
pub use event::{InputEvent, Key};
