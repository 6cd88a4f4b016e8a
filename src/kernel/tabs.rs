use crate::models::NodeId;

pub const WELCOME_TAB_TITLE: &str = "Welcome";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKey {
    /// Virtual tab with no backing file.
    Welcome,
    File(NodeId),
}

impl TabKey {
    pub fn file(self) -> Option<NodeId> {
        match self {
            TabKey::File(id) => Some(id),
            TabKey::Welcome => None,
        }
    }
}

/// Ordered, duplicate-free list of open tabs plus the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabKey>,
    active: Option<TabKey>,
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TabSet {
    /// Starts with the welcome tab open and active.
    pub fn new() -> Self {
        Self {
            tabs: vec![TabKey::Welcome],
            active: Some(TabKey::Welcome),
        }
    }

    pub fn empty() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }

    pub fn tabs(&self) -> &[TabKey] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<TabKey> {
        self.active
    }

    pub fn active_file(&self) -> Option<NodeId> {
        self.active.and_then(TabKey::file)
    }

    pub fn contains(&self, tab: TabKey) -> bool {
        self.tabs.contains(&tab)
    }

    pub fn index_of(&self, tab: TabKey) -> Option<usize> {
        self.tabs.iter().position(|&t| t == tab)
    }

    /// Appends `tab` if missing and activates it. Returns whether anything changed.
    pub fn open(&mut self, tab: TabKey) -> bool {
        let mut changed = false;
        if !self.tabs.contains(&tab) {
            self.tabs.push(tab);
            changed = true;
        }
        if self.active != Some(tab) {
            self.active = Some(tab);
            changed = true;
        }
        changed
    }

    /// Removes `tab`. When it was active, the last remaining tab becomes active,
    /// or nothing when the set is now empty.
    pub fn close(&mut self, tab: TabKey) -> bool {
        let Some(index) = self.index_of(tab) else {
            return false;
        };
        self.tabs.remove(index);

        if self.active == Some(tab) {
            self.active = self.tabs.last().copied();
        }
        true
    }

    /// Activates an already-open tab; unknown tabs are ignored.
    pub fn activate(&mut self, tab: TabKey) -> bool {
        if !self.tabs.contains(&tab) || self.active == Some(tab) {
            return false;
        }
        self.active = Some(tab);
        true
    }

    pub fn next(&mut self) -> bool {
        self.cycle(1)
    }

    pub fn prev(&mut self) -> bool {
        self.cycle(-1)
    }

    fn cycle(&mut self, delta: isize) -> bool {
        let len = self.tabs.len();
        if len <= 1 {
            return false;
        }
        let current = self
            .active
            .and_then(|t| self.index_of(t))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        let tab = self.tabs[next];
        let changed = self.active != Some(tab);
        self.active = Some(tab);
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tabs.rs"]
mod tests;
