//! Actions that modules can return to communicate with the app

use crate::domain::{IconId, NavigationEntry};

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// A navigation entry was activated
    Navigate(NavigationEntry),

    /// A header affordance was activated
    Header(HeaderAction),

    /// Request quit
    Quit,
}

/// The three affordances on the right of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Notifications,
    Settings,
    Profile,
}

impl HeaderAction {
    pub const ALL: [HeaderAction; 3] = [
        HeaderAction::Notifications,
        HeaderAction::Settings,
        HeaderAction::Profile,
    ];

    pub fn icon(self) -> IconId {
        match self {
            HeaderAction::Notifications => IconId::Bell,
            HeaderAction::Settings => IconId::Settings,
            HeaderAction::Profile => IconId::User,
        }
    }

    /// Name announced for the icon-only button.
    pub fn accessible_name(self) -> &'static str {
        match self {
            HeaderAction::Notifications => "Notifications",
            HeaderAction::Settings => "Settings",
            HeaderAction::Profile => "User Profile",
        }
    }

    pub fn next(self) -> Self {
        match self {
            HeaderAction::Notifications => HeaderAction::Settings,
            HeaderAction::Settings => HeaderAction::Profile,
            HeaderAction::Profile => HeaderAction::Profile,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            HeaderAction::Notifications => HeaderAction::Notifications,
            HeaderAction::Settings => HeaderAction::Notifications,
            HeaderAction::Profile => HeaderAction::Settings,
        }
    }
}
