/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Dashboard,
    Notes,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Dashboard, TabId::Notes];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Dashboard => "Dashboard",
            TabId::Notes => "Notes",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Dashboard => 0,
            TabId::Notes => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
