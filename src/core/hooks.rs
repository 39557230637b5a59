//! Attachment points for behaviour the shell does not define itself

use crate::core::HeaderAction;
use crate::domain::NavigationEntry;

/// Receives activations of header affordances and navigation links.
///
/// The shell performs no routing; an embedding application wires these up.
pub trait ShellHooks {
    fn on_header_action(&mut self, _action: HeaderAction) {}

    fn on_navigate(&mut self, _entry: &NavigationEntry) {}
}

/// Hooks that only leave a trace in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl ShellHooks for NoopHooks {
    fn on_header_action(&mut self, action: HeaderAction) {
        tracing::debug!(action = action.accessible_name(), "header action has no handler");
    }

    fn on_navigate(&mut self, entry: &NavigationEntry) {
        tracing::debug!(label = %entry.label, target = %entry.target, "navigation has no handler");
    }
}
