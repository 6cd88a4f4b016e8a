//! 应用层：工作台与主题

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
