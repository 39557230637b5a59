//! Inline status badges

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::{BadgeVariant, Tone};

pub fn variant_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Primary => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Secondary => Style::default().fg(Color::White).bg(Color::DarkGray),
        BadgeVariant::Outline => Style::default().fg(Color::White),
        BadgeVariant::Destructive => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Cyan,
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Purple => Color::Magenta,
        Tone::Destructive => Color::Red,
    }
}

/// Filled variants pad with spaces; the outline variant draws brackets
/// instead of a background so it keeps the same width.
pub fn badge_span(text: &str, variant: BadgeVariant) -> Span<'static> {
    let content = match variant {
        BadgeVariant::Outline => format!("[{text}]"),
        _ => format!(" {text} "),
    };
    Span::styled(content, variant_style(variant))
}

pub fn tone_badge_span(text: &str, tone: Tone) -> Span<'static> {
    if tone == Tone::Destructive {
        return badge_span(text, BadgeVariant::Destructive);
    }
    Span::styled(
        format!(" {text} "),
        Style::default()
            .fg(Color::Black)
            .bg(tone_color(tone))
            .add_modifier(Modifier::BOLD),
    )
}
