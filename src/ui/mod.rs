use std::io;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

pub mod layout;
pub mod widgets;

use crate::app::App;
use crate::core::{Focus, Module};
use crate::modules::sidebar::TOGGLE_LABEL;
use layout::{centered_rect, ShellAreas};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let areas = app.areas(size);
    let ctx = app.context();

    app.header.render(f, &areas, &ctx, app.header_cursor);
    app.sidebar.render(f, areas.sidebar, &ctx);
    app.content.render(f, areas.content, &ctx);

    draw_sidebar_tooltip(f, &areas, app);
    if app.focus == Focus::Header {
        draw_header_tooltip(f, &areas, app);
    }

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

/// Accessible name of the focused or hovered row, shown beside the
/// collapsed sidebar.
fn draw_sidebar_tooltip(f: &mut Frame, areas: &ShellAreas, app: &App) {
    let focused = app.focus == Focus::Sidebar;
    let Some(entry) = app.sidebar.tooltip_entry(focused) else {
        return;
    };
    let Some(row) = app
        .sidebar
        .registry()
        .position(&entry.label)
        .and_then(|idx| app.sidebar.entry_row(areas.sidebar_list, idx))
    else {
        return;
    };
    let x = areas.sidebar.x.saturating_add(areas.sidebar.width);
    draw_tooltip(f, areas.size, x, row, &entry.label);
}

fn draw_header_tooltip(f: &mut Frame, areas: &ShellAreas, app: &App) {
    let button = areas.header_action_area(app.header_cursor);
    let name = app.header_cursor.accessible_name();
    let width = tooltip_width(name);
    let right = button.x.saturating_add(button.width);
    let x = right.saturating_sub(width).max(areas.header.x);
    let y = areas.header.y.saturating_add(1);
    draw_tooltip(f, areas.size, x, y, name);
}

fn tooltip_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width() + 2).unwrap_or(u16::MAX)
}

fn draw_tooltip(f: &mut Frame, bounds: Rect, x: u16, y: u16, text: &str) {
    let right = bounds.x.saturating_add(bounds.width);
    let bottom = bounds.y.saturating_add(bounds.height);
    if x >= right || y >= bottom {
        return;
    }
    let area = Rect {
        x,
        y,
        width: tooltip_width(text).min(right - x),
        height: 1,
    };
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {text} "),
            Style::default().fg(Color::Black).bg(Color::White),
        )),
        area,
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Global", heading)),
        Line::from("  Tab / S-Tab  Cycle focus"),
        Line::from(format!("  Ctrl-b       {TOGGLE_LABEL}")),
        Line::from("  ?            Toggle help"),
        Line::from("  q / Esc      Quit"),
        Line::from(""),
        Line::from(Span::styled("Sidebar", heading)),
        Line::from("  j / k        Move cursor"),
        Line::from("  g / G        Toggle button / last entry"),
        Line::from("  Enter        Toggle or open entry"),
        Line::from(""),
        Line::from(Span::styled("Content", heading)),
        Line::from("  j / k        Scroll"),
        Line::from("  PgUp / PgDn  Page"),
        Line::from("  g / G        Top / bottom"),
        Line::from(""),
        Line::from(Span::styled("Header", heading)),
        Line::from("  h / l        Select action"),
        Line::from("  Enter        Activate"),
        Line::from(""),
        Line::from("  Mouse        Click, wheel and hover"),
        Line::from(""),
        Line::from(format!("Focus: {}", app.focus.label())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

/// Renders one frame offscreen and returns it as plain text, one line per
/// terminal row with trailing blanks removed.
pub fn snapshot(app: &mut App, width: u16, height: u16) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;
    Ok(buffer_text(terminal.backend().buffer()))
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buffer.get(x, y).symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
