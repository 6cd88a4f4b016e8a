//! codigo - 内存中的 IDE 样机
//!
//! 模块结构：
//! - core: 语义命令与终端输入事件
//! - models: 项目树
//! - kernel: 无头状态机（Store / Action / Effect）及服务
//! - app: 工作台（渲染、输入分发）
//! - tui: 终端守卫与 View 抽象

#[cfg(feature = "tui")]
pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
