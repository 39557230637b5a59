//! Collapsible navigation sidebar
//!
//! Owns the shell's only piece of mutable state ([`SidebarState`]) and
//! renders the navigation registry either as labeled rows (open) or as
//! icon-only rows (collapsed). The chevron button is always painted so the
//! collapsed mode can be left again.

mod state;

pub use state::{SidebarMode, SidebarState, SidebarView};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::core::{Action, Context, Focus, Module};
use crate::domain::{IconId, IconSet, NavigationEntry, NavigationRegistry};
use crate::ui::layout;

pub const GROUP_LABEL: &str = "Business";
pub const TOGGLE_LABEL: &str = "Toggle Sidebar";

/// Keyboard cursor inside the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarCursor {
    Toggle,
    Entry(usize),
}

/// One rendered navigation row.
///
/// `label` is the painted text and disappears when collapsed;
/// `accessible_name` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarRow<'a> {
    pub key: &'a str,
    pub icon: IconId,
    pub label: Option<&'a str>,
    pub accessible_name: &'a str,
}

impl SidebarRow<'_> {
    pub fn text(&self, icons: IconSet) -> String {
        match self.label {
            Some(label) => format!(" {} {}", self.icon.glyph(icons), label),
            None => format!(" {}", self.icon.glyph(icons)),
        }
    }
}

/// Maps entries to rows in registry order.
pub fn sidebar_rows(entries: &[NavigationEntry], view: SidebarView) -> Vec<SidebarRow<'_>> {
    entries
        .iter()
        .map(|entry| SidebarRow {
            key: &entry.label,
            icon: entry.icon,
            label: view.is_open().then_some(entry.label.as_str()),
            accessible_name: &entry.label,
        })
        .collect()
}

/// Chevron points toward the direction the next toggle moves the sidebar.
pub fn toggle_icon(view: SidebarView) -> IconId {
    if view.is_open() {
        IconId::ChevronLeft
    } else {
        IconId::ChevronRight
    }
}

pub struct CollapsibleSidebar {
    state: SidebarState,
    registry: NavigationRegistry,
    cursor: SidebarCursor,
    hover: Option<usize>,
    list_state: ListState,
}

impl CollapsibleSidebar {
    pub fn new(registry: NavigationRegistry) -> Self {
        let cursor = if registry.is_empty() {
            SidebarCursor::Toggle
        } else {
            SidebarCursor::Entry(0)
        };
        Self {
            state: SidebarState::new(),
            registry,
            cursor,
            hover: None,
            list_state: ListState::default(),
        }
    }

    pub fn view(&self) -> SidebarView {
        self.state.view()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
        tracing::debug!(mode = ?self.state.mode(), "sidebar toggled");
    }

    pub fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    pub fn rows(&self) -> Vec<SidebarRow<'_>> {
        sidebar_rows(self.registry.entries(), self.view())
    }

    pub fn cursor(&self) -> SidebarCursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: SidebarCursor) {
        self.cursor = match cursor {
            SidebarCursor::Entry(idx) if idx >= self.registry.len() => SidebarCursor::Toggle,
            other => other,
        };
    }

    pub fn move_up(&mut self) {
        self.cursor = match self.cursor {
            SidebarCursor::Toggle | SidebarCursor::Entry(0) => SidebarCursor::Toggle,
            SidebarCursor::Entry(idx) => SidebarCursor::Entry(idx - 1),
        };
    }

    pub fn move_down(&mut self) {
        let last = self.registry.len().checked_sub(1);
        self.cursor = match (self.cursor, last) {
            (_, None) => SidebarCursor::Toggle,
            (SidebarCursor::Toggle, Some(_)) => SidebarCursor::Entry(0),
            (SidebarCursor::Entry(idx), Some(last)) => SidebarCursor::Entry((idx + 1).min(last)),
        };
    }

    pub fn move_to_first(&mut self) {
        self.cursor = SidebarCursor::Toggle;
    }

    pub fn move_to_last(&mut self) {
        self.cursor = match self.registry.len() {
            0 => SidebarCursor::Toggle,
            len => SidebarCursor::Entry(len - 1),
        };
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.hover = hover.filter(|idx| *idx < self.registry.len());
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Entry whose tooltip is shown: only while collapsed, preferring the
    /// pointer over the keyboard cursor.
    pub fn tooltip_entry(&self, focused: bool) -> Option<&NavigationEntry> {
        if self.is_open() {
            return None;
        }
        let idx = self.hover.or(match (focused, self.cursor) {
            (true, SidebarCursor::Entry(idx)) => Some(idx),
            _ => None,
        })?;
        self.registry.get(idx)
    }

    /// Registry index painted at terminal row `row` of `list_area`.
    pub fn entry_at(&self, list_area: Rect, row: u16) -> Option<usize> {
        if row < list_area.y || row >= list_area.y.saturating_add(list_area.height) {
            return None;
        }
        let idx = self.list_state.offset() + (row - list_area.y) as usize;
        (idx < self.registry.len()).then_some(idx)
    }

    /// Terminal row at which entry `idx` is currently painted, if visible.
    pub fn entry_row(&self, list_area: Rect, idx: usize) -> Option<u16> {
        let offset = self.list_state.offset();
        if idx < offset || idx >= self.registry.len() {
            return None;
        }
        let relative = u16::try_from(idx - offset).ok()?;
        (relative < list_area.height).then(|| list_area.y + relative)
    }

    fn activate(&mut self) -> Action {
        match self.cursor {
            SidebarCursor::Toggle => {
                self.toggle();
                Action::None
            }
            SidebarCursor::Entry(idx) => self
                .registry
                .get(idx)
                .cloned()
                .map(Action::Navigate)
                .unwrap_or(Action::None),
        }
    }

    fn render_toggle(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let focused = ctx.has_focus(Focus::Sidebar) && self.cursor == SidebarCursor::Toggle;
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let glyph = toggle_icon(self.view()).glyph(ctx.icons);
        let button = Paragraph::new(Line::from(Span::styled(format!(" {glyph} "), style)))
            .alignment(Alignment::Right);
        frame.render_widget(button, area);
    }
}

impl Module for CollapsibleSidebar {
    fn id(&self) -> &'static str {
        "sidebar"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.move_to_first(),
            KeyCode::End | KeyCode::Char('G') => self.move_to_last(),
            KeyCode::Enter | KeyCode::Char(' ') => return self.activate(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let focused = ctx.has_focus(Focus::Sidebar);
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if self.is_open() {
            block = block.title(Span::styled(
                format!(" {GROUP_LABEL} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(block, area);

        let (toggle_area, list_area) = layout::sidebar_regions(area);

        let items: Vec<ListItem> = self
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let style = if self.hover == Some(idx) {
                    Style::default().fg(Color::LightCyan)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(row.text(ctx.icons))).style(style)
            })
            .collect();

        let highlight_style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items).highlight_style(highlight_style);

        self.list_state.select(match self.cursor {
            SidebarCursor::Entry(idx) => Some(idx),
            SidebarCursor::Toggle => None,
        });
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        self.render_toggle(frame, toggle_area, ctx);
    }
}
