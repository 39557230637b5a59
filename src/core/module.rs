//! Module trait for interactive shell regions

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::{Action, Context};

/// Trait for UI modules that own a region of the shell
pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input while this module has focus.
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &Context);
}
