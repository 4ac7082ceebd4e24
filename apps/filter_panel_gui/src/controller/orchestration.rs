//! Bridges controller notifications onto the UI event queue.

use crossbeam_channel::{Sender, TrySendError};
use filter_core::SelectionObserver;
use shared::domain::FilterSelection;

use crate::controller::events::UiEvent;

/// Observer that forwards each selection to the host over a bounded queue.
///
/// Sends never block. A failed send is kept as a status message for the UI.
pub struct HostBridge {
    ui_tx: Sender<UiEvent>,
    last_failure: Option<String>,
}

impl HostBridge {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self {
            ui_tx,
            last_failure: None,
        }
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }
}

impl SelectionObserver for HostBridge {
    fn on_change(&mut self, selection: &FilterSelection) {
        match self.ui_tx.try_send(UiEvent::FiltersChanged(selection.clone())) {
            Ok(()) => {
                tracing::debug!(
                    specialties = selection.specialties().len(),
                    "queued filter change for host"
                );
                self.last_failure = None;
            }
            Err(TrySendError::Full(_)) => {
                tracing::warn!("host event queue full; dropping filter change");
                self.last_failure =
                    Some("Filter update queue is full; the listing may be stale".to_string());
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("host event receiver disconnected");
                self.last_failure =
                    Some("Listing view disconnected; filter changes are not delivered".to_string());
            }
        }
    }
}
