//! Filter-selection state for the doctor directory panel.
//!
//! [`FilterSelectionController`] owns the current [`FilterSelection`] and the
//! local [`SectionVisibility`]. Every mutator commits its change and then calls
//! the registered [`SelectionObserver`] once with the full snapshot.

use shared::{
    domain::{ConsultationMode, FilterSelection, Section, SectionVisibility, SortKey, Specialty},
    protocol::FilterAction,
};
use tracing::debug;

/// Receives the full selection after every committed change.
pub trait SelectionObserver {
    fn on_change(&mut self, selection: &FilterSelection);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&FilterSelection),
{
    fn on_change(&mut self, selection: &FilterSelection) {
        self(selection)
    }
}

pub struct FilterSelectionController<O> {
    selection: FilterSelection,
    visibility: SectionVisibility,
    observer: O,
}

impl<O: SelectionObserver> FilterSelectionController<O> {
    /// Starts from the caller's initial selection with every section expanded.
    /// Construction does not notify; see [`Self::announce`].
    pub fn new(initial: FilterSelection, observer: O) -> Self {
        Self {
            selection: initial,
            visibility: SectionVisibility::default(),
            observer,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn visibility(&self) -> SectionVisibility {
        self.visibility
    }

    pub fn is_selected(&self, specialty: Specialty) -> bool {
        self.selection.contains(specialty)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Reports the current selection without changing it. Hosts call this
    /// once after mounting so they start from the panel's initial state.
    pub fn announce(&mut self) {
        self.notify("announce");
    }

    /// Selecting the active mode clears it; any other mode replaces it.
    pub fn set_consultation_mode(&mut self, mode: ConsultationMode) {
        self.selection.consultation_mode = toggle_choice(self.selection.consultation_mode, mode);
        self.notify("consultation_mode");
    }

    pub fn toggle_specialty(&mut self, specialty: Specialty) {
        let selected = self.selection.toggle_specialty(specialty);
        debug!(specialty = specialty.name(), selected, "specialty toggled");
        self.notify("specialty");
    }

    /// Same reselect-clears rule as [`Self::set_consultation_mode`].
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.selection.sort_key = toggle_choice(self.selection.sort_key, key);
        self.notify("sort_key");
    }

    /// Resets all three fields in one transition with a single notification.
    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.notify("clear_all");
    }

    /// Local display state only; the observer is not called.
    pub fn toggle_section_visibility(&mut self, section: Section) {
        let expanded = self.visibility.toggle(section);
        debug!(section = section.as_str(), expanded, "filter section toggled");
    }

    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::SetConsultationMode(mode) => self.set_consultation_mode(mode),
            FilterAction::ToggleSpecialty(specialty) => self.toggle_specialty(specialty),
            FilterAction::SetSortKey(key) => self.set_sort_key(key),
            FilterAction::ClearAll => self.clear_all(),
            FilterAction::ToggleSection(section) => self.toggle_section_visibility(section),
        }
    }

    pub fn into_parts(self) -> (FilterSelection, O) {
        (self.selection, self.observer)
    }

    fn notify(&mut self, cause: &'static str) {
        debug!(
            cause,
            consultation_mode = ?self.selection.consultation_mode,
            specialties = self.selection.specialties().len(),
            sort_key = ?self.selection.sort_key,
            "filter selection changed"
        );
        self.observer.on_change(&self.selection);
    }
}

fn toggle_choice<T: PartialEq>(current: Option<T>, requested: T) -> Option<T> {
    match current {
        Some(active) if active == requested => None,
        _ => Some(requested),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
