//! CLI library components for the Folio preferences tool.

pub mod commands;
pub mod logging;
