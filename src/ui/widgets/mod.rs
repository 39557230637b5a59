//! Presentation widgets for the dashboard content panel
//!
//! Each widget borrows one record and paints it; none of them keep state.

pub mod badge;
pub mod metric_card;
pub mod progress_row;
pub mod quick_stat;
pub mod transaction_row;

pub use badge::{badge_span, tone_badge_span, tone_color, variant_style};
pub use metric_card::{trend_color, MetricCard, METRIC_CARD_HEIGHT};
pub use progress_row::{filled_width, ProgressRow, PROGRESS_ROW_HEIGHT};
pub use quick_stat::{QuickStatRow, QUICK_STAT_ROW_HEIGHT};
pub use transaction_row::{TransactionRow, TRANSACTION_ROW_HEIGHT};

use ratatui::layout::Rect;

/// One-line slice of `area` starting `offset` rows down.
pub(crate) fn line_at(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: 1,
    })
}
