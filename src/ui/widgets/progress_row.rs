//! Labeled horizontal progress bar

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use super::{line_at, tone_color};
use crate::domain::ProgressRecord;

/// Label line plus bar line.
pub const PROGRESS_ROW_HEIGHT: u16 = 2;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Number of filled cells for a bar `width` cells wide.
pub fn filled_width(ratio: f64, width: u16) -> u16 {
    let ratio = ratio.clamp(0.0, 1.0);
    ((ratio * f64::from(width)).round() as u16).min(width)
}

pub struct ProgressRow<'a> {
    record: &'a ProgressRecord,
}

impl<'a> ProgressRow<'a> {
    pub fn new(record: &'a ProgressRecord) -> Self {
        Self { record }
    }
}

impl Widget for ProgressRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if let Some(label) = line_at(area, 0) {
            Paragraph::new(Span::styled(
                self.record.label.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .render(label, buf);
            Paragraph::new(Span::styled(
                format!("{}%", self.record.percent),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right)
            .render(label, buf);
        }

        let Some(bar) = line_at(area, 1) else {
            return;
        };
        let filled = filled_width(self.record.ratio(), bar.width);
        let fill_style = Style::default().fg(tone_color(self.record.tone));
        let track_style = Style::default().fg(Color::DarkGray);
        for i in 0..bar.width {
            let (ch, style) = if i < filled {
                (FILLED, fill_style)
            } else {
                (EMPTY, track_style)
            };
            buf.get_mut(bar.x + i, bar.y).set_char(ch).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tone;

    #[test]
    fn test_filled_width_is_proportional() {
        assert_eq!(filled_width(0.78, 100), 78);
        assert_eq!(filled_width(0.5, 11), 6);
        assert_eq!(filled_width(0.0, 40), 0);
        assert_eq!(filled_width(1.0, 40), 40);
        assert_eq!(filled_width(3.0, 40), 40);
    }

    #[test]
    fn test_row_shows_percent_verbatim_and_fills_bar() {
        let record = ProgressRecord {
            label: "Sales".into(),
            percent: 78,
            tone: Tone::Primary,
        };
        let area = Rect::new(0, 0, 20, PROGRESS_ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        ProgressRow::new(&record).render(area, &mut buf);

        let top: String = (0..20).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert!(top.starts_with("Sales"));
        assert!(top.ends_with("78%"));

        let bar: String = (0..20).map(|x| buf.get(x, 1).symbol().to_string()).collect();
        assert_eq!(bar.chars().filter(|c| *c == FILLED).count(), 16);
        assert_eq!(buf.get(0, 1).fg, Color::Cyan);
    }
}
