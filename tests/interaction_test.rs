//! Keyboard and mouse flows: hooks, focus and independent scrolling

mod common;

use bizdash::core::{Focus, HeaderAction};
use bizdash::modules::sidebar::SidebarCursor;
use bizdash::ShellOptions;
use common::*;
use crossterm::event::{KeyCode, MouseEventKind};

#[test]
fn test_navigation_and_header_reach_hooks() {
    let recorder = Recorder::default();
    let mut app = small_app(ShellOptions::default()).with_hooks(recorder.clone());
    render(&mut app, WIDTH, HEIGHT);
    let areas = app.areas(size());

    app.handle_key(key(KeyCode::Enter));
    app.handle_mouse(click(areas.sidebar_list.x + 3, areas.sidebar_list.y + 3), size());

    let gear = areas.header_action_area(HeaderAction::Settings);
    app.handle_mouse(click(gear.x + 1, gear.y), size());

    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(
        recorder.calls(),
        vec![
            Hooked::Navigate("Dashboard".into(), "#".into()),
            Hooked::Navigate("Customers".into(), "#".into()),
            Hooked::Header(HeaderAction::Settings),
            Hooked::Header(HeaderAction::Notifications),
        ]
    );
    // hooks never touch the sidebar state
    assert!(app.sidebar_view().is_open());
}

#[test]
fn test_toggle_control_is_reachable_by_keyboard() {
    let mut app = small_app(ShellOptions::default());
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.sidebar().cursor(), SidebarCursor::Toggle);
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.sidebar_view().is_open());
    app.handle_key(key(KeyCode::Char(' ')));
    assert!(app.sidebar_view().is_open());
}

#[test]
fn test_content_and_sidebar_scroll_independently() {
    let mut app = sample_app();
    render(&mut app, WIDTH, 16);
    assert!(app.content().max_scroll() > 3);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Content);
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Down));
    }
    render(&mut app, WIDTH, 16);
    assert_eq!(app.content().scroll(), 3);
    assert_eq!(app.sidebar().cursor(), SidebarCursor::Entry(0));

    let size = ratatui::layout::Rect::new(0, 0, WIDTH, 16);
    let areas = app.areas(size);
    app.handle_mouse(
        mouse(MouseEventKind::ScrollDown, areas.sidebar_list.x, areas.sidebar_list.y),
        size,
    );
    assert_eq!(app.sidebar().cursor(), SidebarCursor::Entry(1));
    assert_eq!(app.content().scroll(), 3);

    app.handle_mouse(
        mouse(MouseEventKind::ScrollUp, areas.content.x + 4, areas.content.y + 4),
        size,
    );
    assert_eq!(app.content().scroll(), 0);
    assert_eq!(app.sidebar().cursor(), SidebarCursor::Entry(1));

    app.handle_key(key(KeyCode::End));
    assert_eq!(app.content().scroll(), app.content().max_scroll());
}

#[test]
fn test_content_scroll_survives_toggle() {
    let mut app = sample_app();
    render(&mut app, WIDTH, 16);
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::PageDown));
    let scrolled = app.content().scroll();
    assert!(scrolled > 0);

    app.handle_key(ctrl('b'));
    render(&mut app, WIDTH, 16);
    assert!(!app.sidebar_view().is_open());
    assert!(app.content().scroll() <= scrolled);
    assert!(app.content().scroll() > 0);
}

#[test]
fn test_help_blocks_other_input() {
    let mut app = small_app(ShellOptions::default());
    app.handle_key(key(KeyCode::Char('?')));
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert!(find_text(&buf, "Help").is_some());

    let toggle = app.areas(size()).sidebar_toggle;
    app.handle_mouse(click(toggle.x + 1, toggle.y), size());
    app.handle_key(ctrl('b'));
    assert!(app.sidebar_view().is_open());

    app.handle_key(key(KeyCode::Char('?')));
    assert!(!app.help_open);
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
