//! Domain types shared by the filter controller, the desktop panel and the tools CLI.

pub mod domain;
pub mod element_ids;
pub mod error;
pub mod protocol;
