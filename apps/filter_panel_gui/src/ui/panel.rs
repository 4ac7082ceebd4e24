//! Filter panel rendering. Widgets report clicks as [`FilterAction`]s; the
//! caller applies them after the frame is laid out.
//!
//! Element identifiers are used as egui `push_id` scopes, which hash them into
//! internal `Id`s. They are not visible to tooling outside the process; an
//! external harness reads them from [`PanelRow::element_id`] or from
//! `tools catalog`.

use shared::{
    domain::{ConsultationMode, FilterSelection, Section, SectionVisibility, SortKey, Specialty},
    protocol::FilterAction,
};

const SPECIALTY_LIST_MAX_HEIGHT: f32 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Radio,
    Checkbox,
}

/// One clickable line of the panel. `checked` is the expanded flag for
/// headers and the selection state for controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub kind: RowKind,
    pub element_id: String,
    pub label: &'static str,
    pub checked: bool,
    pub action: FilterAction,
}

/// Header row followed by the section's controls, which are omitted while
/// the section is collapsed.
pub fn section_rows(
    section: Section,
    selection: &FilterSelection,
    visibility: SectionVisibility,
) -> Vec<PanelRow> {
    let expanded = visibility.is_expanded(section);
    let mut rows = vec![PanelRow {
        kind: RowKind::Header,
        element_id: section.header_element_id().to_string(),
        label: section.title(),
        checked: expanded,
        action: FilterAction::ToggleSection(section),
    }];
    if !expanded {
        return rows;
    }

    match section {
        Section::Sort => rows.extend(SortKey::ALL.into_iter().map(|key| PanelRow {
            kind: RowKind::Radio,
            element_id: key.element_id().to_string(),
            label: key.label(),
            checked: selection.sort_key == Some(key),
            action: FilterAction::SetSortKey(key),
        })),
        Section::Specialities => {
            rows.extend(Specialty::CATALOG.iter().copied().map(|specialty| PanelRow {
                kind: RowKind::Checkbox,
                element_id: specialty.element_id(),
                label: specialty.name(),
                checked: selection.contains(specialty),
                action: FilterAction::ToggleSpecialty(specialty),
            }))
        }
        Section::ConsultationMode => {
            rows.extend(ConsultationMode::ALL.into_iter().map(|mode| PanelRow {
                kind: RowKind::Radio,
                element_id: mode.element_id().to_string(),
                label: mode.label(),
                checked: selection.consultation_mode == Some(mode),
                action: FilterAction::SetConsultationMode(mode),
            }))
        }
    }
    rows
}

pub fn panel_rows(selection: &FilterSelection, visibility: SectionVisibility) -> Vec<PanelRow> {
    Section::ALL
        .into_iter()
        .flat_map(|section| section_rows(section, selection, visibility))
        .collect()
}

pub fn filter_panel(
    ui: &mut egui::Ui,
    selection: &FilterSelection,
    visibility: SectionVisibility,
) -> Vec<FilterAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.heading("Filters");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.link("Clear All").clicked() {
                actions.push(FilterAction::ClearAll);
            }
        });
    });
    ui.add_space(8.0);

    for section in Section::ALL {
        let rows = section_rows(section, selection, visibility);
        let Some((header, controls)) = rows.split_first() else {
            continue;
        };
        show_row(ui, header, &mut actions);

        if section == Section::Specialities && !controls.is_empty() {
            egui::ScrollArea::vertical()
                .max_height(SPECIALTY_LIST_MAX_HEIGHT)
                .show(ui, |ui| {
                    for row in controls {
                        show_row(ui, row, &mut actions);
                    }
                });
        } else {
            for row in controls {
                show_row(ui, row, &mut actions);
            }
        }
        ui.add_space(4.0);
        ui.separator();
    }

    actions
}

fn show_row(ui: &mut egui::Ui, row: &PanelRow, actions: &mut Vec<FilterAction>) {
    ui.push_id(&row.element_id, |ui| {
        let clicked = match row.kind {
            RowKind::Header => {
                let chevron = if row.checked { "▲" } else { "▼" };
                let text = egui::RichText::new(format!("{}  {chevron}", row.label)).strong();
                ui.add(egui::Button::new(text).frame(false)).clicked()
            }
            RowKind::Radio => ui.radio(row.checked, row.label).clicked(),
            RowKind::Checkbox => {
                let mut checked = row.checked;
                ui.checkbox(&mut checked, row.label).changed()
            }
        };
        if clicked {
            actions.push(row.action);
        }
    });
}
