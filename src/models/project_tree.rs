//! In-memory project tree.
//!
//! The tree is a forest: an ordered list of top-level nodes, each of which may be
//! a folder with ordered children. Nodes live in an arena keyed by [`NodeId`] with
//! explicit parent links, so edits touch only the affected node and its parent
//! instead of rebuilding the whole structure.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifier of a node. Allocated from a monotonically increasing counter and
/// never reused, even after the node is deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectTreeError {
    ParentNotFound(NodeId),
    NodeNotFound(NodeId),
    EmptyName,
    InvalidName,
}

impl fmt::Display for ProjectTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectTreeError::ParentNotFound(id) => write!(f, "parent folder {id} not found"),
            ProjectTreeError::NodeNotFound(id) => write!(f, "node {id} not found"),
            ProjectTreeError::EmptyName => write!(f, "name required"),
            ProjectTreeError::InvalidName => write!(f, "invalid name"),
        }
    }
}

impl std::error::Error for ProjectTreeError {}

#[derive(Debug, Clone)]
enum NodeData {
    File {
        extension: CompactString,
    },
    Folder {
        expanded: bool,
        children: Vec<NodeId>,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: CompactString,
    parent: Option<NodeId>,
    data: NodeData,
}

impl Node {
    fn new(id: NodeId, name: &str, parent: Option<NodeId>, kind: NodeKind) -> Self {
        let data = match kind {
            NodeKind::File => NodeData::File {
                extension: CompactString::from(extension_of(name)),
            },
            NodeKind::Folder => NodeData::Folder {
                expanded: false,
                children: Vec::new(),
            },
        };
        Self {
            id,
            name: CompactString::from(name),
            parent,
            data,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::File { .. } => NodeKind::File,
            NodeData::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.data, NodeData::Folder { .. })
    }

    /// File extension; `None` for folders.
    pub fn extension(&self) -> Option<&str> {
        match &self.data {
            NodeData::File { extension } => Some(extension),
            NodeData::Folder { .. } => None,
        }
    }

    /// Always `false` for files.
    pub fn is_expanded(&self) -> bool {
        matches!(self.data, NodeData::Folder { expanded: true, .. })
    }

    /// Empty for files and for empty folders.
    pub fn children(&self) -> &[NodeId] {
        match &self.data {
            NodeData::Folder { children, .. } => children,
            NodeData::File { .. } => &[],
        }
    }
}

/// Substring after the last `.` of `name`, or `""` when there is none.
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Trims `name` and rejects blank or path-like input.
pub fn validate_name(name: &str) -> Result<&str, ProjectTreeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProjectTreeError::EmptyName);
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ProjectTreeError::InvalidName);
    }
    Ok(name)
}

#[derive(Debug, Clone)]
pub struct ProjectTree {
    nodes: FxHashMap<NodeId, Node>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl Default for ProjectTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectTree {
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            roots: Vec::new(),
            next_id: 1,
        }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.name())
    }

    pub fn is_folder(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(Node::is_folder)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| !n.is_folder())
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(Node::is_expanded)
    }

    /// The id the next created node will receive.
    pub fn peek_next_id(&self) -> NodeId {
        NodeId(self.next_id)
    }

    /// Moves the id counter forward so that every id below `floor` is reserved.
    pub fn reserve_ids_below(&mut self, floor: u64) {
        self.next_id = self.next_id.max(floor);
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new node under `parent` (or at the top level for `None`).
    ///
    /// Inserting into a folder expands it so the new child is visible.
    pub fn insert_under(
        &mut self,
        parent: Option<NodeId>,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, ProjectTreeError> {
        let name = validate_name(name)?;
        if let Some(parent) = parent {
            if !self.is_folder(parent) {
                return Err(ProjectTreeError::ParentNotFound(parent));
            }
        }

        let id = self.allocate_id();
        self.attach(Node::new(id, name, parent, kind));
        Ok(id)
    }

    /// Inserts a node with a caller-chosen id. Used for seed data; the id counter
    /// is bumped past `id` so it is never handed out again.
    pub(crate) fn insert_with_id(
        &mut self,
        parent: Option<NodeId>,
        id: NodeId,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, ProjectTreeError> {
        if let Some(parent) = parent {
            if !self.is_folder(parent) {
                return Err(ProjectTreeError::ParentNotFound(parent));
            }
        }
        debug_assert!(!self.nodes.contains_key(&id), "seed id {id} used twice");

        self.next_id = self.next_id.max(id.0 + 1);
        self.attach(Node::new(id, name, parent, kind));
        Ok(id)
    }

    fn attach(&mut self, node: Node) {
        let id = node.id;
        let parent = node.parent;
        self.nodes.insert(id, node);

        match parent {
            None => self.roots.push(id),
            Some(parent) => {
                if let Some(NodeData::Folder { expanded, children }) =
                    self.nodes.get_mut(&parent).map(|n| &mut n.data)
                {
                    children.push(id);
                    *expanded = true;
                }
            }
        }
    }

    /// Deletes `id` and its whole subtree. Returns the removed ids in pre-order,
    /// or `None` when `id` is not in the tree.
    pub fn remove(&mut self, id: NodeId) -> Option<Vec<NodeId>> {
        let parent = self.nodes.get(&id)?.parent;

        match parent {
            None => self.roots.retain(|&r| r != id),
            Some(parent) => {
                if let Some(NodeData::Folder { children, .. }) =
                    self.nodes.get_mut(&parent).map(|n| &mut n.data)
                {
                    children.retain(|&c| c != id);
                }
            }
        }

        let removed = self.subtree(id);
        for node_id in &removed {
            self.nodes.remove(node_id);
        }
        Some(removed)
    }

    /// Renames a node. File extensions follow the new name.
    ///
    /// Returns `Ok(false)` when the name is unchanged.
    pub fn rename(&mut self, id: NodeId, new_name: &str) -> Result<bool, ProjectTreeError> {
        let new_name = validate_name(new_name)?;
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(ProjectTreeError::NodeNotFound(id))?;

        if node.name == new_name {
            return Ok(false);
        }

        node.name = CompactString::from(new_name);
        if let NodeData::File { extension } = &mut node.data {
            *extension = CompactString::from(extension_of(new_name));
        }
        Ok(true)
    }

    /// Flips `expanded` on a folder. Files are left alone and `false` is returned.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(&id).map(|n| &mut n.data) {
            Some(NodeData::Folder { expanded, .. }) => {
                *expanded = !*expanded;
                true
            }
            _ => false,
        }
    }

    pub fn set_expanded(&mut self, id: NodeId, value: bool) -> bool {
        match self.nodes.get_mut(&id).map(|n| &mut n.data) {
            Some(NodeData::Folder { expanded, .. }) if *expanded != value => {
                *expanded = value;
                true
            }
            _ => false,
        }
    }

    /// `id` followed by all of its descendants, pre-order. Empty if `id` is unknown.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.nodes.contains_key(&id) {
            return out;
        }

        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            let Some(node) = self.nodes.get(&node_id) else {
                continue;
            };
            out.push(node_id);
            for &child in node.children().iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// Every file in the subtree rooted at `id`, including `id` itself.
    pub fn descendant_files(&self, id: NodeId) -> Vec<NodeId> {
        self.subtree(id)
            .into_iter()
            .filter(|&node_id| self.is_file(node_id))
            .collect()
    }

    /// All nodes in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.roots
            .iter()
            .flat_map(|&root| self.subtree(root))
            .filter_map(|id| self.nodes.get(&id))
    }

    /// First file with exactly this name, depth-first.
    pub fn find_file_by_name(&self, name: &str) -> Option<NodeId> {
        self.iter()
            .find(|n| !n.is_folder() && n.name() == name)
            .map(Node::id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub kind: NodeKind,
    pub extension: CompactString,
    pub is_expanded: bool,
}

impl ProjectTree {
    /// Rows of the currently visible nodes: children of collapsed folders are skipped.
    pub fn flatten_for_view(&self) -> Vec<ProjectTreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };

            result.push(ProjectTreeRow {
                id,
                depth,
                name: node.name.clone(),
                kind: node.kind(),
                extension: node
                    .extension()
                    .map(CompactString::from)
                    .unwrap_or_default(),
                is_expanded: node.is_expanded(),
            });

            if node.is_expanded() {
                for &child in node.children().iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/project_tree.rs"]
mod tests;
