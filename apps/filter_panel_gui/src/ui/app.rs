use crossbeam_channel::{Receiver, Sender};
use filter_core::FilterSelectionController;
use shared::{domain::FilterSelection, protocol::FilterAction};

use crate::controller::{events::UiEvent, orchestration::HostBridge};
use crate::ui::panel;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 64, 64);

/// The filter panel plus a host view that mirrors whatever the controller
/// last reported, the way the directory page would.
pub struct FilterPanelApp {
    controller: FilterSelectionController<HostBridge>,
    ui_rx: Receiver<UiEvent>,
    host_selection: Option<FilterSelection>,
    notifications_received: usize,
    status: String,
}

impl FilterPanelApp {
    pub fn new(initial: FilterSelection, ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut controller = FilterSelectionController::new(initial, HostBridge::new(ui_tx));
        controller.announce();

        let mut app = Self {
            controller,
            ui_rx,
            host_selection: None,
            notifications_received: 0,
            status: String::new(),
        };
        app.drain_ui_events();
        app
    }

    fn apply_actions(&mut self, actions: Vec<FilterAction>) {
        for action in actions {
            tracing::debug!(%action, "applying filter action");
            self.controller.apply(action);
        }
        self.status = self
            .controller
            .observer()
            .last_failure()
            .unwrap_or_default()
            .to_string();
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::FiltersChanged(selection) => {
                    self.notifications_received += 1;
                    self.host_selection = Some(selection);
                }
            }
        }
    }

    fn show_host_view(&self, ui: &mut egui::Ui) {
        ui.heading("Doctor listing");
        ui.label(format!(
            "Filter updates received: {}",
            self.notifications_received
        ));
        ui.add_space(8.0);

        let Some(selection) = &self.host_selection else {
            ui.label("Waiting for the filter panel...");
            return;
        };

        egui::Grid::new("host_filters")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Mode of consultation");
                ui.label(
                    selection
                        .consultation_mode
                        .map(|mode| mode.label())
                        .unwrap_or("Any"),
                );
                ui.end_row();

                ui.label("Specialities");
                if selection.specialties().is_empty() {
                    ui.label("Any");
                } else {
                    let names: Vec<&str> =
                        selection.specialties().iter().map(|s| s.name()).collect();
                    ui.label(names.join(", "));
                }
                ui.end_row();

                ui.label("Sort by");
                ui.label(selection.sort_key.map(|key| key.label()).unwrap_or("Relevance"));
                ui.end_row();
            });

        ui.add_space(12.0);
        match serde_json::to_string_pretty(selection) {
            Ok(json) => {
                ui.monospace(json);
            }
            Err(err) => {
                ui.colored_label(ERROR_COLOR, format!("failed to encode selection: {err}"));
            }
        }
    }
}

impl eframe::App for FilterPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ui_events();

        let mut actions = Vec::new();
        egui::SidePanel::left("filter_panel")
            .resizable(false)
            .exact_width(280.0)
            .show(ctx, |ui| {
                actions = panel::filter_panel(
                    ui,
                    self.controller.selection(),
                    self.controller.visibility(),
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.status.is_empty() {
                ui.colored_label(ERROR_COLOR, self.status.as_str());
                ui.separator();
            }
            self.show_host_view(ui);
        });

        if !actions.is_empty() {
            self.apply_actions(actions);
            ctx.request_repaint();
        }
    }
}
