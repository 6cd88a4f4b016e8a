//! Service ports: data contracts shared by the kernel and the adapters.

pub mod config;
pub mod settings;

pub use config::IdeConfig;
pub use settings::{ChatSettings, KeybindingRule, Settings};
