//! Open/collapsed state machine of the sidebar

/// The two sidebar modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Open,
    Collapsed,
}

/// The single mutable value of the shell. Only the sidebar holds one.
#[derive(Debug, PartialEq, Eq)]
pub struct SidebarState {
    mode: SidebarMode,
}

impl SidebarState {
    /// Every mount starts open.
    pub(crate) fn new() -> Self {
        Self {
            mode: SidebarMode::Open,
        }
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode == SidebarMode::Open
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            SidebarMode::Open => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Open,
        };
    }

    pub fn view(&self) -> SidebarView {
        SidebarView { mode: self.mode }
    }
}

/// Read-only copy of the sidebar state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarView {
    mode: SidebarMode,
}

impl SidebarView {
    pub fn mode(self) -> SidebarMode {
        self.mode
    }

    pub fn is_open(self) -> bool {
        self.mode == SidebarMode::Open
    }
}
