//! Screen-space UI: control panel and victory overlay.

mod panel;
mod plugin;
mod victory;

pub use panel::PanelState;
pub use plugin::UiPlugin;
