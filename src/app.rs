//! Shell state: the three regions, focus, and the hooks they report to

use chrono::Local;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::core::{Action, Context, Focus, HeaderAction, Module, NoopHooks, ShellHooks};
use crate::domain::{DashboardData, IconSet, NavigationRegistry};
use crate::modules::dashboard::ContentPanel;
use crate::modules::header::{Brand, HeaderBar};
use crate::modules::sidebar::{CollapsibleSidebar, SidebarCursor, SidebarView};
use crate::ui::layout::{self, rect_contains, ShellAreas, SidebarWidths};

const WHEEL_STEP: i32 = 3;

/// Presentation settings resolved from the config file and CLI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub brand: Brand,
    pub icons: IconSet,
    pub widths: SidebarWidths,
}

impl ShellOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            brand: config.brand(),
            icons: config.icon_set(),
            widths: config.sidebar_widths(),
        }
    }
}

pub struct App {
    pub(crate) sidebar: CollapsibleSidebar,
    pub(crate) header: HeaderBar,
    pub(crate) content: ContentPanel,
    pub(crate) focus: Focus,
    pub(crate) header_cursor: HeaderAction,
    pub help_open: bool,
    pub should_quit: bool,
    icons: IconSet,
    widths: SidebarWidths,
    hooks: Box<dyn ShellHooks>,
}

impl App {
    pub fn new(options: ShellOptions, registry: NavigationRegistry, data: DashboardData) -> Self {
        Self::with_content(options, registry, ContentPanel::new(data))
    }

    pub fn with_content(
        options: ShellOptions,
        registry: NavigationRegistry,
        content: ContentPanel,
    ) -> Self {
        Self {
            sidebar: CollapsibleSidebar::new(registry),
            header: HeaderBar::new(options.brand),
            content,
            focus: Focus::Sidebar,
            header_cursor: HeaderAction::Notifications,
            help_open: false,
            should_quit: false,
            icons: options.icons,
            widths: options.widths,
            hooks: Box::new(NoopHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: impl ShellHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn context(&self) -> Context {
        Context {
            sidebar: self.sidebar.view(),
            focus: self.focus,
            icons: self.icons,
            now: Local::now(),
        }
    }

    pub fn sidebar(&self) -> &CollapsibleSidebar {
        &self.sidebar
    }

    pub fn sidebar_view(&self) -> SidebarView {
        self.sidebar.view()
    }

    pub fn content(&self) -> &ContentPanel {
        &self.content
    }

    pub fn header(&self) -> &HeaderBar {
        &self.header
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn header_cursor(&self) -> HeaderAction {
        self.header_cursor
    }

    pub fn icons(&self) -> IconSet {
        self.icons
    }

    pub fn areas(&self, size: Rect) -> ShellAreas {
        layout::areas(size, self.sidebar.view(), self.widths)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.help_open = false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.apply_action(Action::Quit)
                }
                _ => {}
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.apply_action(Action::Quit)
            }
            (KeyCode::Char('b'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.toggle_sidebar()
            }
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => self.apply_action(Action::Quit),
            (KeyCode::Char('?'), _) => self.help_open = true,
            (KeyCode::Tab, _) => self.focus = self.focus.next(),
            (KeyCode::BackTab, _) => self.focus = self.focus.prev(),
            _ => {
                let ctx = self.context();
                let action = match self.focus {
                    Focus::Sidebar => dispatch(&mut self.sidebar, key, &ctx),
                    Focus::Content => dispatch(&mut self.content, key, &ctx),
                    Focus::Header => self.handle_header_key(key),
                };
                self.apply_action(action);
            }
        }
    }

    fn handle_header_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.header_cursor = self.header_cursor.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.header_cursor = self.header_cursor.next(),
            KeyCode::Enter | KeyCode::Char(' ') => return Action::Header(self.header_cursor),
            _ => {}
        }
        Action::None
    }

    /// Mouse input against the layout for a terminal of `size`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if self.help_open {
            return;
        }
        let areas = self.areas(size);
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(&areas, col, row),
            MouseEventKind::ScrollUp => self.handle_scroll(&areas, col, row, -1),
            MouseEventKind::ScrollDown => self.handle_scroll(&areas, col, row, 1),
            MouseEventKind::Moved => self.handle_hover(&areas, col, row),
            _ => {}
        }
    }

    fn handle_click(&mut self, areas: &ShellAreas, col: u16, row: u16) {
        if rect_contains(areas.sidebar_toggle, col, row) {
            self.focus = Focus::Sidebar;
            self.sidebar.set_cursor(SidebarCursor::Toggle);
            self.toggle_sidebar();
            return;
        }

        if rect_contains(areas.sidebar, col, row) {
            self.focus = Focus::Sidebar;
            if let Some(idx) = self.sidebar.entry_at(areas.sidebar_list, row) {
                self.sidebar.set_cursor(SidebarCursor::Entry(idx));
                if let Some(entry) = self.sidebar.registry().get(idx).cloned() {
                    self.apply_action(Action::Navigate(entry));
                }
            }
            return;
        }

        if let Some(action) = areas.header_action_at(col, row) {
            self.focus = Focus::Header;
            self.apply_action(Action::Header(action));
            return;
        }

        if rect_contains(areas.content, col, row) {
            self.focus = Focus::Content;
        }
    }

    fn handle_scroll(&mut self, areas: &ShellAreas, col: u16, row: u16, direction: i32) {
        if rect_contains(areas.sidebar, col, row) {
            if direction < 0 {
                self.sidebar.move_up();
            } else {
                self.sidebar.move_down();
            }
        } else if rect_contains(areas.content, col, row) {
            self.content.scroll_by(direction * WHEEL_STEP);
        }
    }

    fn handle_hover(&mut self, areas: &ShellAreas, col: u16, row: u16) {
        let hover = if rect_contains(areas.sidebar_list, col, row) {
            self.sidebar.entry_at(areas.sidebar_list, row)
        } else {
            None
        };
        self.sidebar.set_hover(hover);
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(entry) => {
                tracing::debug!(label = %entry.label, "navigation activated");
                self.hooks.on_navigate(&entry);
            }
            Action::Header(action) => {
                self.header_cursor = action;
                tracing::debug!(action = action.accessible_name(), "header action activated");
                self.hooks.on_header_action(action);
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

fn dispatch(module: &mut dyn Module, key: KeyEvent, ctx: &Context) -> Action {
    tracing::trace!(module = module.id(), code = ?key.code, "key");
    module.handle_key(key, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::domain::{sample, NavigationEntry};

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ShellHooks for Recorder {
        fn on_header_action(&mut self, action: HeaderAction) {
            self.0.borrow_mut().push(action.accessible_name().to_string());
        }

        fn on_navigate(&mut self, entry: &NavigationEntry) {
            self.0.borrow_mut().push(entry.label.clone());
        }
    }

    fn app() -> App {
        App::new(
            ShellOptions::default(),
            sample::navigation(),
            sample::dashboard(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const SIZE: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_starts_open_with_sidebar_focus() {
        let app = app();
        assert!(app.sidebar_view().is_open());
        assert_eq!(app.focus(), Focus::Sidebar);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_b_toggles_from_any_focus() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Content);
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert!(!app.sidebar_view().is_open());
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
        assert!(app.sidebar_view().is_open());
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Header);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Sidebar);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.focus(), Focus::Header);
    }

    #[test]
    fn test_esc_closes_help_before_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.help_open);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.help_open);
        assert!(!app.should_quit);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_header_keys_fire_hook() {
        let recorder = Recorder::default();
        let mut app = app().with_hooks(recorder.clone());
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.focus(), Focus::Header);
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.header_cursor(), HeaderAction::Profile);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(*recorder.0.borrow(), vec!["User Profile".to_string()]);
    }

    #[test]
    fn test_sidebar_enter_fires_navigate() {
        let recorder = Recorder::default();
        let mut app = app().with_hooks(recorder.clone());
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(*recorder.0.borrow(), vec!["Analytics".to_string()]);
        assert!(app.sidebar_view().is_open());
    }

    #[test]
    fn test_click_toggle_flips_state() {
        let mut app = app();
        let toggle = app.areas(SIZE).sidebar_toggle;
        app.handle_mouse(click(toggle.x + 1, toggle.y), SIZE);
        assert!(!app.sidebar_view().is_open());

        let toggle = app.areas(SIZE).sidebar_toggle;
        app.handle_mouse(click(toggle.x, toggle.y), SIZE);
        assert!(app.sidebar_view().is_open());
    }

    #[test]
    fn test_click_row_and_header_action() {
        let recorder = Recorder::default();
        let mut app = app().with_hooks(recorder.clone());
        let areas = app.areas(SIZE);

        app.handle_mouse(click(areas.sidebar_list.x + 2, areas.sidebar_list.y + 2), SIZE);
        assert_eq!(app.sidebar().cursor(), SidebarCursor::Entry(2));

        let bell = areas.header_action_area(HeaderAction::Notifications);
        app.handle_mouse(click(bell.x + 1, bell.y), SIZE);
        assert_eq!(app.focus(), Focus::Header);

        app.handle_mouse(click(areas.content.x + 5, areas.content.y + 5), SIZE);
        assert_eq!(app.focus(), Focus::Content);

        assert_eq!(
            *recorder.0.borrow(),
            vec!["Reports".to_string(), "Notifications".to_string()]
        );
        assert!(app.sidebar_view().is_open());
    }

    #[test]
    fn test_hover_sets_and_clears() {
        let mut app = app();
        let areas = app.areas(SIZE);
        let moved = |column, row| MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(moved(areas.sidebar_list.x, areas.sidebar_list.y + 1), SIZE);
        assert_eq!(app.sidebar().hover(), Some(1));
        app.handle_mouse(moved(areas.content.x + 3, areas.content.y + 3), SIZE);
        assert_eq!(app.sidebar().hover(), None);
    }
}
