pub mod action;
pub mod context;
pub mod hooks;
pub mod module;

pub use action::{Action, HeaderAction};
pub use context::{Context, Focus};
pub use hooks::{NoopHooks, ShellHooks};
pub use module::Module;
