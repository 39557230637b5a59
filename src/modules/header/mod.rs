//! Header bar: brand block on the left, icon-only actions on the right

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::core::{Context, Focus, HeaderAction};
use crate::ui::layout::ShellAreas;

/// Brand text shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub mark: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "App Name".to_string(),
            mark: "A".to_string(),
        }
    }
}

/// Stateless renderer; which action is highlighted comes from the shell.
#[derive(Debug, Clone)]
pub struct HeaderBar {
    brand: Brand,
}

impl HeaderBar {
    pub fn new(brand: Brand) -> Self {
        Self { brand }
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        areas: &ShellAreas,
        ctx: &Context,
        highlighted: HeaderAction,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, areas.header);

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.brand.mark),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                self.brand.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let brand_area = Rect {
            height: areas.header.height.min(1),
            ..areas.header
        };
        frame.render_widget(Paragraph::new(brand), brand_area);

        let header_focused = ctx.has_focus(Focus::Header);
        for action in HeaderAction::ALL {
            let area = areas.header_action_area(action);
            if area.width == 0 {
                continue;
            }
            let style = if header_focused && action == highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let button = Span::styled(format!(" {} ", action.icon().glyph(ctx.icons)), style);
            frame.render_widget(Paragraph::new(Line::from(button)), area);
        }
    }
}
