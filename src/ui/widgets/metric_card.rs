//! Metric summary card

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use super::line_at;
use crate::domain::{IconSet, MetricRecord, TrendDirection};

/// Border plus title, value and trend lines.
pub const METRIC_CARD_HEIGHT: u16 = 5;

/// Up is favorable (green), down unfavorable (red); the delta text is
/// painted as given.
pub fn trend_color(direction: TrendDirection) -> Color {
    if direction.is_favorable() {
        Color::Green
    } else {
        Color::Red
    }
}

pub struct MetricCard<'a> {
    record: &'a MetricRecord,
    icons: IconSet,
}

impl<'a> MetricCard<'a> {
    pub fn new(record: &'a MetricRecord, icons: IconSet) -> Self {
        Self { record, icons }
    }
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(title) = line_at(inner, 0) {
            Paragraph::new(Span::styled(
                self.record.label.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .render(title, buf);
            Paragraph::new(Span::styled(
                self.record.icon.glyph(self.icons),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right)
            .render(title, buf);
        }

        if let Some(value) = line_at(inner, 1) {
            Paragraph::new(Span::styled(
                self.record.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(value, buf);
        }

        if let Some(trend) = line_at(inner, 2) {
            let color = trend_color(self.record.direction);
            let line = Line::from(vec![
                Span::styled(
                    self.record.direction.icon().glyph(self.icons),
                    Style::default().fg(color),
                ),
                Span::raw(" "),
                Span::styled(self.record.delta.as_str(), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    self.record.period.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            Paragraph::new(line).render(trend, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IconId;

    fn record(delta: &str, direction: TrendDirection) -> MetricRecord {
        MetricRecord {
            label: "Orders".into(),
            value: "+12,234".into(),
            delta: delta.into(),
            direction,
            icon: IconId::ShoppingCart,
            period: "from last month".into(),
        }
    }

    fn render(record: &MetricRecord) -> Buffer {
        let area = Rect::new(0, 0, 30, METRIC_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        MetricCard::new(record, IconSet::Ascii).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_down_card_paints_red_down_icon() {
        let buf = render(&record("-4.5%", TrendDirection::Down));
        let icon = buf.get(1, 3);
        assert_eq!(icon.symbol(), "v");
        assert_eq!(icon.fg, Color::Red);
    }

    #[test]
    fn test_up_card_paints_green_up_icon() {
        let buf = render(&record("+20.1%", TrendDirection::Up));
        let icon = buf.get(1, 3);
        assert_eq!(icon.symbol(), "^");
        assert_eq!(icon.fg, Color::Green);
    }

    #[test]
    fn test_direction_wins_over_delta_sign() {
        let buf = render(&record("+4.5%", TrendDirection::Down));
        assert_eq!(buf.get(1, 3).fg, Color::Red);
        let buf = render(&record("-4.5%", TrendDirection::Up));
        assert_eq!(buf.get(1, 3).fg, Color::Green);
    }

    #[test]
    fn test_value_is_painted() {
        let buf = render(&record("-4.5%", TrendDirection::Down));
        let value_line: String = (1..8).map(|x| buf.get(x, 2).symbol().to_string()).collect();
        assert_eq!(value_line, "+12,234");
    }
}
