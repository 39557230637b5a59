//! Transaction row: customer and email on the left, amount and status badge
//! on the right

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{badge_span, line_at};
use crate::domain::TransactionRecord;

pub const TRANSACTION_ROW_HEIGHT: u16 = 2;

pub struct TransactionRow<'a> {
    record: &'a TransactionRecord,
}

impl<'a> TransactionRow<'a> {
    pub fn new(record: &'a TransactionRecord) -> Self {
        Self { record }
    }
}

impl Widget for TransactionRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(top) = line_at(area, 0) {
            Paragraph::new(Span::styled(
                self.record.customer.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .render(top, buf);

            let status = &self.record.status;
            let right = Line::from(vec![
                Span::styled(
                    self.record.amount.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                badge_span(status.as_str(), status.variant()),
            ]);
            Paragraph::new(right)
                .alignment(Alignment::Right)
                .render(top, buf);
        }
        if let Some(bottom) = line_at(area, 1) {
            Paragraph::new(Span::styled(
                self.record.email.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .render(bottom, buf);
        }
    }
}
