//! UI layer: app shell, the filter panel and the host-side listing summary.

pub mod app;
pub mod panel;

pub use app::FilterPanelApp;
