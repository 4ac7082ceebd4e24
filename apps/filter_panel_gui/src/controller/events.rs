//! Events delivered from the filter controller to the host side of the app.

use shared::domain::FilterSelection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    FiltersChanged(FilterSelection),
}
