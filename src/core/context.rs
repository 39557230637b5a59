//! Shared read-only context passed to modules

use chrono::{DateTime, Local};

use crate::domain::IconSet;
use crate::modules::sidebar::SidebarView;

/// Region that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
    Header,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Header,
            Focus::Header => Focus::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Header,
            Focus::Content => Focus::Sidebar,
            Focus::Header => Focus::Content,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Sidebar => "Sidebar",
            Focus::Content => "Content",
            Focus::Header => "Header",
        }
    }
}

/// Snapshot handed to every module for one input or render pass.
///
/// Holds a copy of the sidebar view, never the sidebar state itself, so
/// nothing outside the sidebar can flip it.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub sidebar: SidebarView,
    pub focus: Focus,
    pub icons: IconSet,
    pub now: DateTime<Local>,
}

impl Context {
    pub fn has_focus(&self, focus: Focus) -> bool {
        self.focus == focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_ring_round_trips() {
        for focus in [Focus::Sidebar, Focus::Content, Focus::Header] {
            assert_eq!(focus.next().prev(), focus);
            assert_eq!(focus.next().next().next(), focus);
        }
    }
}
