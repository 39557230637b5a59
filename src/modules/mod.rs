//! Shell regions
//!
//! Each region owns its own input handling and rendering:
//! - header: brand and icon-only actions
//! - sidebar: collapsible navigation, the only mutable shared state
//! - dashboard: the scrollable content panel

pub mod dashboard;
pub mod header;
pub mod sidebar;
