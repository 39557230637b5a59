//! Quick-stat row: label, headline value and a tone badge

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use super::{line_at, tone_badge_span};
use crate::domain::QuickStatRecord;

pub const QUICK_STAT_ROW_HEIGHT: u16 = 2;

pub struct QuickStatRow<'a> {
    record: &'a QuickStatRecord,
}

impl<'a> QuickStatRow<'a> {
    pub fn new(record: &'a QuickStatRecord) -> Self {
        Self { record }
    }
}

impl Widget for QuickStatRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(label) = line_at(area, 0) {
            Paragraph::new(Span::styled(
                self.record.label.as_str(),
                Style::default().fg(Color::Gray),
            ))
            .render(label, buf);
        }
        if let Some(value) = line_at(area, 1) {
            Paragraph::new(Span::styled(
                self.record.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(value, buf);
            Paragraph::new(tone_badge_span(&self.record.badge, self.record.tone))
                .alignment(Alignment::Right)
                .render(value, buf);
        }
    }
}
