//! Controller layer: UI events and forwarding of filter changes to the host view.

pub mod events;
pub mod orchestration;
