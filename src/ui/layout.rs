//! Shell layout: header above a [sidebar, content] row

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::HeaderAction;
use crate::modules::sidebar::SidebarView;

pub const HEADER_HEIGHT: u16 = 2;

/// Border, a one-column icon and the three-column chevron button.
pub const MIN_COLLAPSED_WIDTH: u16 = 5;

const TOGGLE_WIDTH: u16 = 3;
const ACTION_WIDTH: u16 = 3;
const ACTION_GAP: u16 = 1;

/// Sidebar width in each mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarWidths {
    pub expanded: u16,
    pub collapsed: u16,
}

impl SidebarWidths {
    pub fn new(expanded: u16, collapsed: u16) -> Self {
        let collapsed = collapsed.max(MIN_COLLAPSED_WIDTH);
        Self {
            expanded: expanded.max(collapsed),
            collapsed,
        }
    }

    pub fn for_view(self, view: SidebarView) -> u16 {
        if view.is_open() {
            self.expanded
        } else {
            self.collapsed
        }
    }
}

impl Default for SidebarWidths {
    fn default() -> Self {
        Self::new(24, 7)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub size: Rect,
    pub header: Rect,
    pub header_actions: [Rect; 3],
    pub body: Rect,
    pub sidebar: Rect,
    pub sidebar_toggle: Rect,
    pub sidebar_list: Rect,
    pub content: Rect,
}

impl ShellAreas {
    pub fn header_action_at(&self, col: u16, row: u16) -> Option<HeaderAction> {
        HeaderAction::ALL
            .iter()
            .zip(self.header_actions.iter())
            .find(|(_, rect)| rect_contains(**rect, col, row))
            .map(|(action, _)| *action)
    }

    pub fn header_action_area(&self, action: HeaderAction) -> Rect {
        let idx = HeaderAction::ALL
            .iter()
            .position(|candidate| *candidate == action)
            .unwrap_or(0);
        self.header_actions[idx]
    }
}

/// The content width is never computed here directly; it is whatever the
/// horizontal split leaves after the sidebar.
pub fn areas(size: Rect, sidebar: SidebarView, widths: SidebarWidths) -> ShellAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(size);

    let sidebar_width = widths.for_view(sidebar).min(vertical[1].width);
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[1]);

    let (sidebar_toggle, sidebar_list) = sidebar_regions(row[0]);

    ShellAreas {
        size,
        header: vertical[0],
        header_actions: header_action_areas(vertical[0]),
        body: vertical[1],
        sidebar: row[0],
        sidebar_toggle,
        sidebar_list,
        content: row[1],
    }
}

/// Splits the sidebar's bordered interior into the chevron button (top
/// right) and the scrollable entry list below it.
pub fn sidebar_regions(sidebar: Rect) -> (Rect, Rect) {
    let inner = rect_inner(sidebar);
    let toggle_width = TOGGLE_WIDTH.min(inner.width);
    let toggle = Rect {
        x: inner.x + inner.width - toggle_width,
        y: inner.y,
        width: toggle_width,
        height: inner.height.min(1),
    };
    let list = Rect {
        x: inner.x,
        y: inner.y.saturating_add(1),
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    (toggle, list)
}

fn header_action_areas(header: Rect) -> [Rect; 3] {
    let count = HeaderAction::ALL.len() as u16;
    let total = count * ACTION_WIDTH + (count - 1) * ACTION_GAP;
    let right = header.x.saturating_add(header.width).saturating_sub(1);
    let start = right.saturating_sub(total).max(header.x);
    let mut rects = [Rect::default(); 3];
    for (idx, rect) in rects.iter_mut().enumerate() {
        let x = start + idx as u16 * (ACTION_WIDTH + ACTION_GAP);
        *rect = Rect {
            x,
            y: header.y,
            width: ACTION_WIDTH.min(right.saturating_sub(x)),
            height: header.height.min(1),
        };
    }
    rects
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
