//! 数据模型层

pub mod project_tree;

pub use project_tree::{
    extension_of, validate_name, Node, NodeId, NodeKind, ProjectTree, ProjectTreeError,
    ProjectTreeRow,
};
