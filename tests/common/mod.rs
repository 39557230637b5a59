//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bizdash::core::{HeaderAction, ShellHooks};
use bizdash::domain::{
    sample, DashboardData, IconId, MetricRecord, NavigationEntry, NavigationRegistry,
    TransactionRecord, TrendDirection,
};
use bizdash::{ui, App, ShellOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

pub fn size() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

/// Four entries, one metric and one Pending transaction.
pub fn small_inputs() -> (NavigationRegistry, DashboardData) {
    let registry = NavigationRegistry::new(
        sample::navigation().entries().iter().take(4).cloned(),
    );
    let data = DashboardData {
        metrics: vec![MetricRecord {
            label: "Total Revenue".into(),
            value: "$45,231.89".into(),
            delta: "+20.1%".into(),
            direction: TrendDirection::Up,
            icon: IconId::DollarSign,
            period: "from last month".into(),
        }],
        transactions: vec![TransactionRecord {
            customer: "Alice Williams".into(),
            email: "alice@example.com".into(),
            amount: "$125.00".into(),
            status: "Pending".into(),
        }],
        ..DashboardData::default()
    };
    (registry, data)
}

pub fn small_app(options: ShellOptions) -> App {
    let (registry, data) = small_inputs();
    App::new(options, registry, data)
}

pub fn sample_app() -> App {
    App::new(
        ShellOptions::default(),
        sample::navigation(),
        sample::dashboard(),
    )
}

pub fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Text of `rect`, rows joined with newlines.
pub fn region_text(buf: &Buffer, rect: Rect) -> String {
    (rect.y..rect.y + rect.height)
        .map(|y| {
            (rect.x..rect.x + rect.width)
                .map(|x| buf.get(x, y).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Top-left cell of the first occurrence of `needle` on a single row.
pub fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    for y in area.y..area.y + area.height {
        let symbols: Vec<&str> = (area.x..area.x + area.width)
            .map(|x| buf.get(x, y).symbol())
            .collect();
        let line: String = symbols.concat();
        if let Some(byte_idx) = line.find(needle) {
            let mut seen = 0;
            for (col, symbol) in symbols.iter().enumerate() {
                if seen == byte_idx {
                    return Some((area.x + col as u16, y));
                }
                seen += symbol.len();
            }
        }
    }
    None
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hooked {
    Header(HeaderAction),
    Navigate(String, String),
}

/// Hooks that remember every call
#[derive(Clone, Default)]
pub struct Recorder(pub Rc<RefCell<Vec<Hooked>>>);

impl Recorder {
    pub fn calls(&self) -> Vec<Hooked> {
        self.0.borrow().clone()
    }
}

impl ShellHooks for Recorder {
    fn on_header_action(&mut self, action: HeaderAction) {
        self.0.borrow_mut().push(Hooked::Header(action));
    }

    fn on_navigate(&mut self, entry: &NavigationEntry) {
        self.0
            .borrow_mut()
            .push(Hooked::Navigate(entry.label.clone(), entry.target.clone()));
    }
}
