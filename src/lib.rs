//! Business dashboard shell for the terminal: a header, a collapsible
//! icon-mode navigation sidebar and a scrollable content panel.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod modules;
pub mod ui;

pub use app::{App, ShellOptions};
