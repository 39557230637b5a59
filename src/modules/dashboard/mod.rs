//! Dashboard content panel
//!
//! Vertical composition, top to bottom: title block with freshness badge,
//! metric card grid, [progress | quick stats] row, recent transactions.
//! The whole column is painted into an offscreen buffer sized to its
//! natural height and the visible window is copied into the frame, which
//! gives the panel its own scroll position independent of the sidebar.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Widget,
};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::{BadgeVariant, DashboardData};
use crate::ui::widgets::{
    badge_span, line_at, MetricCard, ProgressRow, QuickStatRow, TransactionRow,
    METRIC_CARD_HEIGHT, PROGRESS_ROW_HEIGHT, QUICK_STAT_ROW_HEIGHT, TRANSACTION_ROW_HEIGHT,
};

pub const TITLE: &str = "Dashboard";
pub const SUBTITLE: &str = "Welcome back! Here's your business overview.";

const HEADER_HEIGHT: u16 = 2;
const SECTION_GAP: u16 = 1;
const MIN_CARD_WIDTH: u16 = 22;
const SIDE_BY_SIDE_WIDTH: u16 = 60;

struct CardCopy {
    title: &'static str,
    description: &'static str,
}

const PROGRESS_CARD: CardCopy = CardCopy {
    title: "Recent Activity",
    description: "Your business performance over time",
};
const QUICK_STATS_CARD: CardCopy = CardCopy {
    title: "Quick Stats",
    description: "Key metrics at a glance",
};
const TRANSACTIONS_CARD: CardCopy = CardCopy {
    title: "Recent Transactions",
    description: "Latest orders from your customers",
};

/// Columns of the metric grid for a content column `width` cells wide.
pub fn metric_columns(width: u16) -> u16 {
    if width >= MIN_CARD_WIDTH * 4 {
        4
    } else if width >= MIN_CARD_WIDTH * 2 {
        2
    } else {
        1
    }
}

/// Text for the "Last updated" badge.
pub fn freshness_label(loaded_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(loaded_at);
    if elapsed.num_seconds() < 60 {
        "Just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{} min ago", elapsed.num_minutes())
    } else {
        loaded_at.format("%H:%M").to_string()
    }
}

/// Height of a bordered card holding `rows` items, one blank line apart.
/// An empty card still shows its title and description.
fn card_height(rows: usize, row_height: u16) -> u16 {
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    let body = if rows == 0 {
        0
    } else {
        rows.saturating_mul(row_height + 1)
    };
    (2 + 1u16).saturating_add(body)
}

/// Section rectangles in the panel's own coordinates (origin at 0,0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayout {
    pub width: u16,
    pub height: u16,
    pub header: Rect,
    pub metrics: Vec<Rect>,
    pub progress: Rect,
    pub quick_stats: Rect,
    pub transactions: Rect,
}

pub fn content_layout(width: u16, data: &DashboardData) -> ContentLayout {
    let mut y = 0u16;

    let header = Rect::new(0, y, width, HEADER_HEIGHT);
    y = y.saturating_add(HEADER_HEIGHT + SECTION_GAP);

    let columns = metric_columns(width);
    let column_width = width / columns;
    let mut metrics = Vec::with_capacity(data.metrics.len());
    for idx in 0..data.metrics.len() {
        let idx = u16::try_from(idx).unwrap_or(u16::MAX);
        let (row, col) = (idx / columns, idx % columns);
        let x = col * column_width;
        let card_width = if col + 1 == columns {
            width - x
        } else {
            column_width
        };
        metrics.push(Rect::new(
            x,
            y.saturating_add(row.saturating_mul(METRIC_CARD_HEIGHT)),
            card_width,
            METRIC_CARD_HEIGHT,
        ));
    }
    if !metrics.is_empty() {
        let rows = u16::try_from(data.metrics.len().div_ceil(columns as usize)).unwrap_or(u16::MAX);
        y = y.saturating_add(rows.saturating_mul(METRIC_CARD_HEIGHT) + SECTION_GAP);
    }

    let progress_height = card_height(data.progress.len(), PROGRESS_ROW_HEIGHT);
    let quick_height = card_height(data.quick_stats.len(), QUICK_STAT_ROW_HEIGHT);
    let (progress, quick_stats) = if width >= SIDE_BY_SIDE_WIDTH {
        let left = width / 7 * 4 + width % 7 * 4 / 7;
        let height = progress_height.max(quick_height);
        let panes = (
            Rect::new(0, y, left, height),
            Rect::new(left, y, width - left, height),
        );
        y = y.saturating_add(height + SECTION_GAP);
        panes
    } else {
        let progress = Rect::new(0, y, width, progress_height);
        y = y.saturating_add(progress_height);
        let quick = Rect::new(0, y, width, quick_height);
        y = y.saturating_add(quick_height + SECTION_GAP);
        (progress, quick)
    };

    let transactions_height = card_height(data.transactions.len(), TRANSACTION_ROW_HEIGHT);
    let transactions = Rect::new(0, y, width, transactions_height);
    y = y.saturating_add(transactions_height);

    ContentLayout {
        width,
        height: y,
        header,
        metrics,
        progress,
        quick_stats,
        transactions,
    }
}

pub struct ContentPanel {
    data: DashboardData,
    loaded_at: DateTime<Local>,
    scroll: u16,
    max_scroll: u16,
    viewport: u16,
}

impl ContentPanel {
    pub fn new(data: DashboardData) -> Self {
        Self::with_loaded_at(data, Local::now())
    }

    pub fn with_loaded_at(data: DashboardData, loaded_at: DateTime<Local>) -> Self {
        Self {
            data,
            loaded_at,
            scroll: 0,
            max_scroll: 0,
            viewport: 0,
        }
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Largest scroll offset seen at the last render.
    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta);
        self.scroll = next.clamp(0, i32::from(self.max_scroll)) as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    fn page(&self) -> i32 {
        i32::from(self.viewport.saturating_sub(1).max(1))
    }

    /// Sections are clipped to `buf`, which may be shorter than the layout.
    fn paint(&self, layout: &ContentLayout, ctx: &Context, buf: &mut Buffer) {
        let bounds = buf.area;
        self.paint_header(layout.header.intersection(bounds), ctx, buf);

        for (record, area) in self.data.metrics.iter().zip(&layout.metrics) {
            MetricCard::new(record, ctx.icons).render(area.intersection(bounds), buf);
        }

        let rows = paint_card(&PROGRESS_CARD, layout.progress.intersection(bounds), buf);
        for (record, area) in self
            .data
            .progress
            .iter()
            .zip(row_slots(rows, PROGRESS_ROW_HEIGHT))
        {
            ProgressRow::new(record).render(area, buf);
        }

        let rows = paint_card(&QUICK_STATS_CARD, layout.quick_stats.intersection(bounds), buf);
        for (record, area) in self
            .data
            .quick_stats
            .iter()
            .zip(row_slots(rows, QUICK_STAT_ROW_HEIGHT))
        {
            QuickStatRow::new(record).render(area, buf);
        }

        let rows = paint_card(
            &TRANSACTIONS_CARD,
            layout.transactions.intersection(bounds),
            buf,
        );
        for (record, area) in self
            .data
            .transactions
            .iter()
            .zip(row_slots(rows, TRANSACTION_ROW_HEIGHT))
        {
            TransactionRow::new(record).render(area, buf);
        }
    }

    fn paint_header(&self, area: Rect, ctx: &Context, buf: &mut Buffer) {
        if let Some(title) = line_at(area, 0) {
            Paragraph::new(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(title, buf);
            let freshness = format!(
                "Last updated: {}",
                freshness_label(self.loaded_at, ctx.now)
            );
            Paragraph::new(badge_span(&freshness, BadgeVariant::Outline))
                .alignment(Alignment::Right)
                .render(title, buf);
        }
        if let Some(subtitle) = line_at(area, 1) {
            Paragraph::new(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray)))
                .render(subtitle, buf);
        }
    }
}

/// Draws the card frame, title and description; returns the area left for
/// item rows.
fn paint_card(copy: &CardCopy, area: Rect, buf: &mut Buffer) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", copy.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    if let Some(description) = line_at(inner, 0) {
        Paragraph::new(Span::styled(
            copy.description,
            Style::default().fg(Color::DarkGray),
        ))
        .render(description, buf);
    }

    Rect {
        y: inner.y.saturating_add(2),
        height: inner.height.saturating_sub(2),
        ..inner
    }
}

/// Row rectangles inside a card body, one blank line apart.
fn row_slots(body: Rect, row_height: u16) -> impl Iterator<Item = Rect> {
    let stride = row_height + 1;
    (0..body.height / stride + u16::from(body.height % stride >= row_height)).map(move |idx| Rect {
        x: body.x,
        y: body.y + idx * stride,
        width: body.width,
        height: row_height,
    })
}

fn blit(canvas: &Buffer, target: &mut Buffer, area: Rect, scroll: u16) {
    let width = area.width.min(canvas.area.width);
    for dy in 0..area.height {
        let src_y = scroll.saturating_add(dy);
        if src_y >= canvas.area.height {
            break;
        }
        for dx in 0..width {
            *target.get_mut(area.x + dx, area.y + dy) = canvas.get(dx, src_y).clone();
        }
    }
}

impl Module for ContentPanel {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::PageDown => self.scroll_by(self.page()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut layout = content_layout(area.width, &self.data);
        let scrollable = layout.height > area.height;
        if scrollable {
            // leave the last column for the scrollbar
            layout = content_layout(area.width - 1, &self.data);
        }

        // a buffer holds at most u16::MAX cells
        let canvas_height = layout.height.clamp(1, u16::MAX / layout.width.max(1));
        self.viewport = area.height;
        self.max_scroll = canvas_height.saturating_sub(area.height);
        self.scroll = self.scroll.min(self.max_scroll);

        let mut canvas = Buffer::empty(Rect {
            x: 0,
            y: 0,
            width: layout.width,
            height: canvas_height,
        });
        self.paint(&layout, ctx, &mut canvas);
        blit(&canvas, frame.buffer_mut(), area, self.scroll);

        if scrollable {
            let mut state = ScrollbarState::new(self.max_scroll as usize)
                .position(self.scroll as usize)
                .viewport_content_length(area.height as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut state,
            );
        }
    }
}
